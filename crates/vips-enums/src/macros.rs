//! `vips_enum!`.

/// Declares a `#[repr(i32)]` enum together with its value accessors and
/// its [`BindingEnum`] implementation.
#[macro_export]
macro_rules! vips_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident = $value:expr),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(i32)]
        pub enum $name {
            $($variant = $value),+
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// The native integer for this member.
            pub const fn value(self) -> i32 {
                self as i32
            }

            pub fn from_value(value: i32) -> Option<Self> {
                Self::ALL.iter().copied().find(|v| v.value() == value)
            }

            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),+
                }
            }
        }

        impl $crate::BindingEnum for $name {
            const TYPE_NAME: &'static str = stringify!($name);

            fn variants() -> &'static [Self] {
                Self::ALL
            }

            fn name(self) -> &'static str {
                $name::name(self)
            }

            fn value(self) -> i32 {
                $name::value(self)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

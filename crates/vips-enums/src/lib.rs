//! # vips-enums
//!
//! Binding-side mirrors of the libvips enumerations. Every enum carries its
//! native integer as the discriminant and implements [`BindingEnum`], so the
//! whole set can be looked up by name through [`symbol_table`].

#[macro_use]
mod macros;
mod defs;

pub use defs::*;

use std::sync::OnceLock;

use parity_core::errors::SymbolError;
use parity_core::{SymbolPath, SymbolTable};

#[doc(hidden)]
pub use parity_core::BindingEnum;

/// Path prefix every group is registered under.
pub const NAMESPACE: &str = "vips::enums";

macro_rules! register_all {
    ($table:expr, $ns:expr, [$($ty:ident),+ $(,)?]) => {
        $( $table.register_enum::<$ty>($ns)?; )+
    };
}

/// Build a fresh table holding every enum under [`NAMESPACE`].
pub fn build_symbol_table() -> Result<SymbolTable, SymbolError> {
    let namespace = SymbolPath::parse(NAMESPACE)?;
    let mut table = SymbolTable::new();
    register_all!(table, Some(&namespace), [
        VipsAccess,
        VipsAlign,
        VipsAngle,
        VipsAngle45,
        VipsArgumentFlags,
        VipsBandFormat,
        VipsBlendMode,
        VipsCoding,
        VipsCombine,
        VipsCombineMode,
        VipsCompassDirection,
        VipsDemandStyle,
        VipsDirection,
        VipsExtend,
        VipsFailOn,
        VipsForeignCoding,
        VipsForeignDzContainer,
        VipsForeignDzDepth,
        VipsForeignDzLayout,
        VipsForeignFlags,
        VipsForeignHeifCompression,
        VipsForeignHeifEncoder,
        VipsForeignJpegSubsample,
        VipsForeignKeep,
        VipsForeignPdfPageBox,
        VipsForeignPngFilter,
        VipsForeignPpmFormat,
        VipsForeignSaveable,
        VipsForeignSubsample,
        VipsForeignTiffCompression,
        VipsForeignTiffPredictor,
        VipsForeignTiffResunit,
        VipsForeignWebpPreset,
        VipsImageType,
        VipsIntent,
        VipsInteresting,
        VipsInterpretation,
        VipsKernel,
        VipsOperationBoolean,
        VipsOperationComplex,
        VipsOperationComplex2,
        VipsOperationComplexget,
        VipsOperationFlags,
        VipsOperationMath,
        VipsOperationMath2,
        VipsOperationMorphology,
        VipsOperationRelational,
        VipsOperationRound,
        VipsPCS,
        VipsPrecision,
        VipsRegionShrink,
        VipsSdfShape,
        VipsSize,
        VipsTextWrap,
        VipsToken,
    ]);
    tracing::debug!(groups = table.len(), members = table.member_count(), "built vips symbol table");
    Ok(table)
}

static SYMBOL_TABLE: OnceLock<Result<SymbolTable, SymbolError>> = OnceLock::new();

/// Process-wide symbol table, built on first use. A build error is kept
/// and returned to every caller.
pub fn symbol_table() -> Result<&'static SymbolTable, SymbolError> {
    SYMBOL_TABLE
        .get_or_init(|| {
            build_symbol_table().inspect_err(|err| {
                tracing::error!(error = %err, "failed to build vips symbol table");
            })
        })
        .as_ref()
        .map_err(Clone::clone)
}

//! Enum definitions, one per libvips enumeration or flag set.

vips_enum! {
    /// How an image will be read.
    VipsAccess {
        Random = 0,
        Sequential = 1,
        SequentialUnbuffered = 2,
    }
}

vips_enum! {
    VipsAlign {
        Low = 0,
        Centre = 1,
        High = 2,
    }
}

vips_enum! {
    VipsAngle {
        D0 = 0,
        D90 = 1,
        D180 = 2,
        D270 = 3,
    }
}

vips_enum! {
    VipsAngle45 {
        D0 = 0,
        D45 = 1,
        D90 = 2,
        D135 = 3,
        D180 = 4,
        D225 = 5,
        D270 = 6,
        D315 = 7,
    }
}

vips_enum! {
    /// Flag values; combinations are plain integers on the native side.
    VipsArgumentFlags {
        ArgumentNone = 0,
        ArgumentRequired = 1,
        ArgumentConstruct = 2,
        ArgumentSetOnce = 4,
        ArgumentSetAlways = 8,
        ArgumentInput = 16,
        ArgumentOutput = 32,
        ArgumentDeprecated = 64,
        ArgumentModify = 128,
        ArgumentNonHashable = 256,
    }
}

vips_enum! {
    /// The format used for each band element.
    VipsBandFormat {
        FormatNotset = -1,
        FormatUchar = 0,
        FormatChar = 1,
        FormatUshort = 2,
        FormatShort = 3,
        FormatUint = 4,
        FormatInt = 5,
        FormatFloat = 6,
        FormatComplex = 7,
        FormatDouble = 8,
        FormatDpcomplex = 9,
    }
}

vips_enum! {
    /// Porter-Duff and PDF blend modes used by composite.
    VipsBlendMode {
        Clear = 0,
        Source = 1,
        Over = 2,
        In = 3,
        Out = 4,
        Atop = 5,
        Dest = 6,
        DestOver = 7,
        DestIn = 8,
        DestOut = 9,
        DestAtop = 10,
        Xor = 11,
        Add = 12,
        Saturate = 13,
        Multiply = 14,
        Screen = 15,
        Overlay = 16,
        Darken = 17,
        Lighten = 18,
        ColourDodge = 19,
        ColourBurn = 20,
        HardLight = 21,
        SoftLight = 22,
        Difference = 23,
        Exclusion = 24,
    }
}

vips_enum! {
    /// How pixels are coded.
    VipsCoding {
        Error = -1,
        None = 0,
        Labq = 2,
        Rad = 6,
    }
}

vips_enum! {
    VipsCombine {
        Max = 0,
        Sum = 1,
        Min = 2,
    }
}

vips_enum! {
    VipsCombineMode {
        Set = 0,
        Add = 1,
    }
}

vips_enum! {
    VipsCompassDirection {
        Centre = 0,
        North = 1,
        East = 2,
        South = 3,
        West = 4,
        NorthEast = 5,
        SouthEast = 6,
        SouthWest = 7,
        NorthWest = 8,
    }
}

vips_enum! {
    /// Hint for how an operation would like its output to be requested.
    VipsDemandStyle {
        Error = -1,
        Smalltile = 0,
        Fatstrip = 1,
        Thinstrip = 2,
        Any = 3,
    }
}

vips_enum! {
    VipsDirection {
        Horizontal = 0,
        Vertical = 1,
    }
}

vips_enum! {
    /// How to extend an image beyond its edges.
    VipsExtend {
        Black = 0,
        Copy = 1,
        Repeat = 2,
        Mirror = 3,
        White = 4,
        Background = 5,
    }
}

vips_enum! {
    VipsFailOn {
        None = 0,
        Truncated = 1,
        Error = 2,
        Warning = 3,
    }
}

vips_enum! {
    /// Flag values; combinations are plain integers on the native side.
    VipsForeignCoding {
        None = 1,
        Labq = 2,
        Rad = 4,
        All = 7,
    }
}

vips_enum! {
    VipsForeignDzContainer {
        Fs = 0,
        Zip = 1,
        Szi = 2,
    }
}

vips_enum! {
    VipsForeignDzDepth {
        Onepixel = 0,
        Onetile = 1,
        One = 2,
    }
}

vips_enum! {
    VipsForeignDzLayout {
        Dz = 0,
        Zoomify = 1,
        Google = 2,
        Iiif = 3,
        Iiif3 = 4,
    }
}

vips_enum! {
    /// Flag values; combinations are plain integers on the native side.
    VipsForeignFlags {
        ForeignNone = 0,
        ForeignPartial = 1,
        ForeignBigendian = 2,
        ForeignSequential = 4,
        ForeignAll = 7,
    }
}

vips_enum! {
    VipsForeignHeifCompression {
        Hevc = 1,
        Avc = 2,
        Jpeg = 3,
        Av1 = 4,
    }
}

vips_enum! {
    VipsForeignHeifEncoder {
        Auto = 0,
        Aom = 1,
        Rav1e = 2,
        Svt = 3,
        X265 = 4,
    }
}

vips_enum! {
    VipsForeignJpegSubsample {
        Auto = 0,
        On = 1,
        Off = 2,
    }
}

vips_enum! {
    /// Which metadata to retain when saving.
    VipsForeignKeep {
        None = 0,
        Exif = 1,
        Xmp = 2,
        Iptc = 4,
        Icc = 8,
        Other = 16,
        Gainmap = 32,
        All = 63,
    }
}

vips_enum! {
    VipsForeignPdfPageBox {
        Media = 0,
        Crop = 1,
        Trim = 2,
        Bleed = 3,
        Art = 4,
    }
}

vips_enum! {
    /// PNG row filters. Values are flags and may be combined.
    VipsForeignPngFilter {
        None = 8,
        Sub = 16,
        Up = 32,
        Avg = 64,
        Paeth = 128,
        All = 248,
    }
}

vips_enum! {
    VipsForeignPpmFormat {
        Pbm = 0,
        Pgm = 1,
        Ppm = 2,
        Pfm = 3,
        Pnm = 4,
    }
}

vips_enum! {
    /// Flag values; combinations are plain integers on the native side.
    VipsForeignSaveable {
        Any = 0,
        Mono = 1,
        Rgb = 2,
        Cmyk = 4,
        Alpha = 8,
        All = 15,
    }
}

vips_enum! {
    VipsForeignSubsample {
        Auto = 0,
        On = 1,
        Off = 2,
    }
}

vips_enum! {
    VipsForeignTiffCompression {
        None = 0,
        Jpeg = 1,
        Deflate = 2,
        Packbits = 3,
        Ccittfax4 = 4,
        Lzw = 5,
        Webp = 6,
        Zstd = 7,
        Jp2k = 8,
    }
}

vips_enum! {
    VipsForeignTiffPredictor {
        None = 1,
        Horizontal = 2,
        Float = 3,
    }
}

vips_enum! {
    VipsForeignTiffResunit {
        Cm = 0,
        Inch = 1,
    }
}

vips_enum! {
    VipsForeignWebpPreset {
        Default = 0,
        Picture = 1,
        Photo = 2,
        Drawing = 3,
        Icon = 4,
        Text = 5,
    }
}

vips_enum! {
    /// Internal image state.
    VipsImageType {
        ImageError = -1,
        ImageNone = 0,
        ImageSetbuf = 1,
        ImageSetbufForeign = 2,
        ImageOpenin = 3,
        ImageMmapin = 4,
        ImageMmapinrw = 5,
        ImageOpenout = 6,
        ImagePartial = 7,
    }
}

vips_enum! {
    /// Rendering intent for colour management.
    VipsIntent {
        Perceptual = 0,
        Relative = 1,
        Saturation = 2,
        Absolute = 3,
        Auto = 32,
    }
}

vips_enum! {
    VipsInteresting {
        None = 0,
        Centre = 1,
        Entropy = 2,
        Attention = 3,
        Low = 4,
        High = 5,
        All = 6,
    }
}

vips_enum! {
    /// How the values in an image should be interpreted.
    ///
    /// The gaps in numbering are historical and must be kept.
    VipsInterpretation {
        Error = -1,
        Multiband = 0,
        BW = 1,
        Histogram = 10,
        Xyz = 12,
        Lab = 13,
        Cmyk = 15,
        Labq = 16,
        Rgb = 17,
        Cmc = 18,
        Lch = 19,
        Labs = 21,
        Srgb = 22,
        Yxy = 23,
        Fourier = 24,
        Rgb16 = 25,
        Grey16 = 26,
        Matrix = 27,
        Scrgb = 28,
        Hsv = 29,
        Oklab = 30,
        Oklch = 31,
    }
}

vips_enum! {
    /// Resampling kernels for shrink and reduce.
    VipsKernel {
        Nearest = 0,
        Linear = 1,
        Cubic = 2,
        Mitchell = 3,
        Lanczos2 = 4,
        Lanczos3 = 5,
        Mks2013 = 6,
        Mks2021 = 7,
    }
}

vips_enum! {
    VipsOperationBoolean {
        And = 0,
        Or = 1,
        Eor = 2,
        Lshift = 3,
        Rshift = 4,
    }
}

vips_enum! {
    VipsOperationComplex {
        Polar = 0,
        Rect = 1,
        Conj = 2,
    }
}

vips_enum! {
    VipsOperationComplex2 {
        CrossPhase = 0,
    }
}

vips_enum! {
    VipsOperationComplexget {
        Real = 0,
        Imag = 1,
    }
}

vips_enum! {
    /// Operation behaviour flags.
    VipsOperationFlags {
        OperationNone = 0,
        OperationSequential = 1,
        OperationSequentialUnbuffered = 2,
        OperationNocache = 4,
        OperationDeprecated = 8,
        OperationUntrusted = 16,
        OperationBlocked = 32,
        OperationRevalidate = 64,
    }
}

vips_enum! {
    VipsOperationMath {
        Sin = 0,
        Cos = 1,
        Tan = 2,
        Asin = 3,
        Acos = 4,
        Atan = 5,
        Log = 6,
        Log10 = 7,
        Exp = 8,
        Exp10 = 9,
        Sinh = 10,
        Cosh = 11,
        Tanh = 12,
        Asinh = 13,
        Acosh = 14,
        Atanh = 15,
    }
}

vips_enum! {
    VipsOperationMath2 {
        Pow = 0,
        Wop = 1,
        Atan2 = 2,
    }
}

vips_enum! {
    VipsOperationMorphology {
        Erode = 0,
        Dilate = 1,
    }
}

vips_enum! {
    VipsOperationRelational {
        Equal = 0,
        Noteq = 1,
        Less = 2,
        Lesseq = 3,
        More = 4,
        Moreeq = 5,
    }
}

vips_enum! {
    VipsOperationRound {
        Rint = 0,
        Ceil = 1,
        Floor = 2,
    }
}

vips_enum! {
    /// Profile connection space.
    VipsPCS {
        PcsLab = 0,
        PcsXyz = 1,
    }
}

vips_enum! {
    VipsPrecision {
        Integer = 0,
        Float = 1,
        Approximate = 2,
    }
}

vips_enum! {
    VipsRegionShrink {
        Mean = 0,
        Median = 1,
        Mode = 2,
        Max = 3,
        Min = 4,
        Nearest = 5,
    }
}

vips_enum! {
    VipsSdfShape {
        Circle = 0,
        Box = 1,
        RoundedBox = 2,
        Line = 3,
    }
}

vips_enum! {
    /// Whether a resize may upsize, downsize, or both.
    VipsSize {
        Both = 0,
        Up = 1,
        Down = 2,
        Force = 3,
    }
}

vips_enum! {
    VipsTextWrap {
        Word = 0,
        Char = 1,
        WordChar = 2,
        None = 3,
    }
}

vips_enum! {
    VipsToken {
        Left = 1,
        Right = 2,
        String = 3,
        Equals = 4,
        Comma = 5,
    }
}

//! The native-to-binding mapping table.
//!
//! One family per libvips enumeration, members in header order. The left
//! column is the native constant, the right column the binding member name.

use parity_engine::MappingFamily;
use vips_sys::*;

/// Every mirrored enumeration.
pub static VIPS_FAMILIES: &[MappingFamily] = &[
    MappingFamily::new(
        "VipsAccess",
        &[
            (VIPS_ACCESS_RANDOM as i64, "Random"),
            (VIPS_ACCESS_SEQUENTIAL as i64, "Sequential"),
            (VIPS_ACCESS_SEQUENTIAL_UNBUFFERED as i64, "SequentialUnbuffered"),
        ],
    ),
    MappingFamily::new(
        "VipsAlign",
        &[
            (VIPS_ALIGN_LOW as i64, "Low"),
            (VIPS_ALIGN_CENTRE as i64, "Centre"),
            (VIPS_ALIGN_HIGH as i64, "High"),
        ],
    ),
    MappingFamily::new(
        "VipsAngle",
        &[
            (VIPS_ANGLE_D0 as i64, "D0"),
            (VIPS_ANGLE_D90 as i64, "D90"),
            (VIPS_ANGLE_D180 as i64, "D180"),
            (VIPS_ANGLE_D270 as i64, "D270"),
        ],
    ),
    MappingFamily::new(
        "VipsAngle45",
        &[
            (VIPS_ANGLE45_D0 as i64, "D0"),
            (VIPS_ANGLE45_D45 as i64, "D45"),
            (VIPS_ANGLE45_D90 as i64, "D90"),
            (VIPS_ANGLE45_D135 as i64, "D135"),
            (VIPS_ANGLE45_D180 as i64, "D180"),
            (VIPS_ANGLE45_D225 as i64, "D225"),
            (VIPS_ANGLE45_D270 as i64, "D270"),
            (VIPS_ANGLE45_D315 as i64, "D315"),
        ],
    ),
    MappingFamily::new(
        "VipsArgumentFlags",
        &[
            (VIPS_ARGUMENT_NONE as i64, "ArgumentNone"),
            (VIPS_ARGUMENT_REQUIRED as i64, "ArgumentRequired"),
            (VIPS_ARGUMENT_CONSTRUCT as i64, "ArgumentConstruct"),
            (VIPS_ARGUMENT_SET_ONCE as i64, "ArgumentSetOnce"),
            (VIPS_ARGUMENT_SET_ALWAYS as i64, "ArgumentSetAlways"),
            (VIPS_ARGUMENT_INPUT as i64, "ArgumentInput"),
            (VIPS_ARGUMENT_OUTPUT as i64, "ArgumentOutput"),
            (VIPS_ARGUMENT_DEPRECATED as i64, "ArgumentDeprecated"),
            (VIPS_ARGUMENT_MODIFY as i64, "ArgumentModify"),
            (VIPS_ARGUMENT_NON_HASHABLE as i64, "ArgumentNonHashable"),
        ],
    ),
    MappingFamily::new(
        "VipsBandFormat",
        &[
            (VIPS_FORMAT_NOTSET as i64, "FormatNotset"),
            (VIPS_FORMAT_UCHAR as i64, "FormatUchar"),
            (VIPS_FORMAT_CHAR as i64, "FormatChar"),
            (VIPS_FORMAT_USHORT as i64, "FormatUshort"),
            (VIPS_FORMAT_SHORT as i64, "FormatShort"),
            (VIPS_FORMAT_UINT as i64, "FormatUint"),
            (VIPS_FORMAT_INT as i64, "FormatInt"),
            (VIPS_FORMAT_FLOAT as i64, "FormatFloat"),
            (VIPS_FORMAT_COMPLEX as i64, "FormatComplex"),
            (VIPS_FORMAT_DOUBLE as i64, "FormatDouble"),
            (VIPS_FORMAT_DPCOMPLEX as i64, "FormatDpcomplex"),
        ],
    ),
    MappingFamily::new(
        "VipsBlendMode",
        &[
            (VIPS_BLEND_MODE_CLEAR as i64, "Clear"),
            (VIPS_BLEND_MODE_SOURCE as i64, "Source"),
            (VIPS_BLEND_MODE_OVER as i64, "Over"),
            (VIPS_BLEND_MODE_IN as i64, "In"),
            (VIPS_BLEND_MODE_OUT as i64, "Out"),
            (VIPS_BLEND_MODE_ATOP as i64, "Atop"),
            (VIPS_BLEND_MODE_DEST as i64, "Dest"),
            (VIPS_BLEND_MODE_DEST_OVER as i64, "DestOver"),
            (VIPS_BLEND_MODE_DEST_IN as i64, "DestIn"),
            (VIPS_BLEND_MODE_DEST_OUT as i64, "DestOut"),
            (VIPS_BLEND_MODE_DEST_ATOP as i64, "DestAtop"),
            (VIPS_BLEND_MODE_XOR as i64, "Xor"),
            (VIPS_BLEND_MODE_ADD as i64, "Add"),
            (VIPS_BLEND_MODE_SATURATE as i64, "Saturate"),
            (VIPS_BLEND_MODE_MULTIPLY as i64, "Multiply"),
            (VIPS_BLEND_MODE_SCREEN as i64, "Screen"),
            (VIPS_BLEND_MODE_OVERLAY as i64, "Overlay"),
            (VIPS_BLEND_MODE_DARKEN as i64, "Darken"),
            (VIPS_BLEND_MODE_LIGHTEN as i64, "Lighten"),
            (VIPS_BLEND_MODE_COLOUR_DODGE as i64, "ColourDodge"),
            (VIPS_BLEND_MODE_COLOUR_BURN as i64, "ColourBurn"),
            (VIPS_BLEND_MODE_HARD_LIGHT as i64, "HardLight"),
            (VIPS_BLEND_MODE_SOFT_LIGHT as i64, "SoftLight"),
            (VIPS_BLEND_MODE_DIFFERENCE as i64, "Difference"),
            (VIPS_BLEND_MODE_EXCLUSION as i64, "Exclusion"),
        ],
    ),
    MappingFamily::new(
        "VipsCoding",
        &[
            (VIPS_CODING_ERROR as i64, "Error"),
            (VIPS_CODING_NONE as i64, "None"),
            (VIPS_CODING_LABQ as i64, "Labq"),
            (VIPS_CODING_RAD as i64, "Rad"),
        ],
    ),
    MappingFamily::new(
        "VipsCombine",
        &[
            (VIPS_COMBINE_MAX as i64, "Max"),
            (VIPS_COMBINE_SUM as i64, "Sum"),
            (VIPS_COMBINE_MIN as i64, "Min"),
        ],
    ),
    MappingFamily::new(
        "VipsCombineMode",
        &[
            (VIPS_COMBINE_MODE_SET as i64, "Set"),
            (VIPS_COMBINE_MODE_ADD as i64, "Add"),
        ],
    ),
    MappingFamily::new(
        "VipsCompassDirection",
        &[
            (VIPS_COMPASS_DIRECTION_CENTRE as i64, "Centre"),
            (VIPS_COMPASS_DIRECTION_NORTH as i64, "North"),
            (VIPS_COMPASS_DIRECTION_EAST as i64, "East"),
            (VIPS_COMPASS_DIRECTION_SOUTH as i64, "South"),
            (VIPS_COMPASS_DIRECTION_WEST as i64, "West"),
            (VIPS_COMPASS_DIRECTION_NORTH_EAST as i64, "NorthEast"),
            (VIPS_COMPASS_DIRECTION_SOUTH_EAST as i64, "SouthEast"),
            (VIPS_COMPASS_DIRECTION_SOUTH_WEST as i64, "SouthWest"),
            (VIPS_COMPASS_DIRECTION_NORTH_WEST as i64, "NorthWest"),
        ],
    ),
    MappingFamily::new(
        "VipsDemandStyle",
        &[
            (VIPS_DEMAND_STYLE_ERROR as i64, "Error"),
            (VIPS_DEMAND_STYLE_SMALLTILE as i64, "Smalltile"),
            (VIPS_DEMAND_STYLE_FATSTRIP as i64, "Fatstrip"),
            (VIPS_DEMAND_STYLE_THINSTRIP as i64, "Thinstrip"),
            (VIPS_DEMAND_STYLE_ANY as i64, "Any"),
        ],
    ),
    MappingFamily::new(
        "VipsDirection",
        &[
            (VIPS_DIRECTION_HORIZONTAL as i64, "Horizontal"),
            (VIPS_DIRECTION_VERTICAL as i64, "Vertical"),
        ],
    ),
    MappingFamily::new(
        "VipsExtend",
        &[
            (VIPS_EXTEND_BLACK as i64, "Black"),
            (VIPS_EXTEND_COPY as i64, "Copy"),
            (VIPS_EXTEND_REPEAT as i64, "Repeat"),
            (VIPS_EXTEND_MIRROR as i64, "Mirror"),
            (VIPS_EXTEND_WHITE as i64, "White"),
            (VIPS_EXTEND_BACKGROUND as i64, "Background"),
        ],
    ),
    MappingFamily::new(
        "VipsFailOn",
        &[
            (VIPS_FAIL_ON_NONE as i64, "None"),
            (VIPS_FAIL_ON_TRUNCATED as i64, "Truncated"),
            (VIPS_FAIL_ON_ERROR as i64, "Error"),
            (VIPS_FAIL_ON_WARNING as i64, "Warning"),
        ],
    ),
    MappingFamily::new(
        "VipsForeignCoding",
        &[
            (VIPS_FOREIGN_CODING_NONE as i64, "None"),
            (VIPS_FOREIGN_CODING_LABQ as i64, "Labq"),
            (VIPS_FOREIGN_CODING_RAD as i64, "Rad"),
            (VIPS_FOREIGN_CODING_ALL as i64, "All"),
        ],
    ),
    MappingFamily::new(
        "VipsForeignDzContainer",
        &[
            (VIPS_FOREIGN_DZ_CONTAINER_FS as i64, "Fs"),
            (VIPS_FOREIGN_DZ_CONTAINER_ZIP as i64, "Zip"),
            (VIPS_FOREIGN_DZ_CONTAINER_SZI as i64, "Szi"),
        ],
    ),
    MappingFamily::new(
        "VipsForeignDzDepth",
        &[
            (VIPS_FOREIGN_DZ_DEPTH_ONEPIXEL as i64, "Onepixel"),
            (VIPS_FOREIGN_DZ_DEPTH_ONETILE as i64, "Onetile"),
            (VIPS_FOREIGN_DZ_DEPTH_ONE as i64, "One"),
        ],
    ),
    MappingFamily::new(
        "VipsForeignDzLayout",
        &[
            (VIPS_FOREIGN_DZ_LAYOUT_DZ as i64, "Dz"),
            (VIPS_FOREIGN_DZ_LAYOUT_ZOOMIFY as i64, "Zoomify"),
            (VIPS_FOREIGN_DZ_LAYOUT_GOOGLE as i64, "Google"),
            (VIPS_FOREIGN_DZ_LAYOUT_IIIF as i64, "Iiif"),
            (VIPS_FOREIGN_DZ_LAYOUT_IIIF3 as i64, "Iiif3"),
        ],
    ),
    MappingFamily::new(
        "VipsForeignFlags",
        &[
            (VIPS_FOREIGN_NONE as i64, "ForeignNone"),
            (VIPS_FOREIGN_PARTIAL as i64, "ForeignPartial"),
            (VIPS_FOREIGN_BIGENDIAN as i64, "ForeignBigendian"),
            (VIPS_FOREIGN_SEQUENTIAL as i64, "ForeignSequential"),
            (VIPS_FOREIGN_ALL as i64, "ForeignAll"),
        ],
    ),
    MappingFamily::new(
        "VipsForeignHeifCompression",
        &[
            (VIPS_FOREIGN_HEIF_COMPRESSION_HEVC as i64, "Hevc"),
            (VIPS_FOREIGN_HEIF_COMPRESSION_AVC as i64, "Avc"),
            (VIPS_FOREIGN_HEIF_COMPRESSION_JPEG as i64, "Jpeg"),
            (VIPS_FOREIGN_HEIF_COMPRESSION_AV1 as i64, "Av1"),
        ],
    ),
    MappingFamily::new(
        "VipsForeignHeifEncoder",
        &[
            (VIPS_FOREIGN_HEIF_ENCODER_AUTO as i64, "Auto"),
            (VIPS_FOREIGN_HEIF_ENCODER_AOM as i64, "Aom"),
            (VIPS_FOREIGN_HEIF_ENCODER_RAV1E as i64, "Rav1e"),
            (VIPS_FOREIGN_HEIF_ENCODER_SVT as i64, "Svt"),
            (VIPS_FOREIGN_HEIF_ENCODER_X265 as i64, "X265"),
        ],
    ),
    MappingFamily::new(
        "VipsForeignJpegSubsample",
        &[
            (VIPS_FOREIGN_JPEG_SUBSAMPLE_AUTO as i64, "Auto"),
            (VIPS_FOREIGN_JPEG_SUBSAMPLE_ON as i64, "On"),
            (VIPS_FOREIGN_JPEG_SUBSAMPLE_OFF as i64, "Off"),
        ],
    ),
    MappingFamily::new(
        "VipsForeignKeep",
        &[
            (VIPS_FOREIGN_KEEP_NONE as i64, "None"),
            (VIPS_FOREIGN_KEEP_EXIF as i64, "Exif"),
            (VIPS_FOREIGN_KEEP_XMP as i64, "Xmp"),
            (VIPS_FOREIGN_KEEP_IPTC as i64, "Iptc"),
            (VIPS_FOREIGN_KEEP_ICC as i64, "Icc"),
            (VIPS_FOREIGN_KEEP_OTHER as i64, "Other"),
            (VIPS_FOREIGN_KEEP_GAINMAP as i64, "Gainmap"),
            (VIPS_FOREIGN_KEEP_ALL as i64, "All"),
        ],
    ),
    MappingFamily::new(
        "VipsForeignPdfPageBox",
        &[
            (VIPS_FOREIGN_PDF_PAGE_BOX_MEDIA as i64, "Media"),
            (VIPS_FOREIGN_PDF_PAGE_BOX_CROP as i64, "Crop"),
            (VIPS_FOREIGN_PDF_PAGE_BOX_TRIM as i64, "Trim"),
            (VIPS_FOREIGN_PDF_PAGE_BOX_BLEED as i64, "Bleed"),
            (VIPS_FOREIGN_PDF_PAGE_BOX_ART as i64, "Art"),
        ],
    ),
    MappingFamily::new(
        "VipsForeignPngFilter",
        &[
            (VIPS_FOREIGN_PNG_FILTER_NONE as i64, "None"),
            (VIPS_FOREIGN_PNG_FILTER_SUB as i64, "Sub"),
            (VIPS_FOREIGN_PNG_FILTER_UP as i64, "Up"),
            (VIPS_FOREIGN_PNG_FILTER_AVG as i64, "Avg"),
            (VIPS_FOREIGN_PNG_FILTER_PAETH as i64, "Paeth"),
            (VIPS_FOREIGN_PNG_FILTER_ALL as i64, "All"),
        ],
    ),
    MappingFamily::new(
        "VipsForeignPpmFormat",
        &[
            (VIPS_FOREIGN_PPM_FORMAT_PBM as i64, "Pbm"),
            (VIPS_FOREIGN_PPM_FORMAT_PGM as i64, "Pgm"),
            (VIPS_FOREIGN_PPM_FORMAT_PPM as i64, "Ppm"),
            (VIPS_FOREIGN_PPM_FORMAT_PFM as i64, "Pfm"),
            (VIPS_FOREIGN_PPM_FORMAT_PNM as i64, "Pnm"),
        ],
    ),
    MappingFamily::new(
        "VipsForeignSaveable",
        &[
            (VIPS_FOREIGN_SAVEABLE_ANY as i64, "Any"),
            (VIPS_FOREIGN_SAVEABLE_MONO as i64, "Mono"),
            (VIPS_FOREIGN_SAVEABLE_RGB as i64, "Rgb"),
            (VIPS_FOREIGN_SAVEABLE_CMYK as i64, "Cmyk"),
            (VIPS_FOREIGN_SAVEABLE_ALPHA as i64, "Alpha"),
            (VIPS_FOREIGN_SAVEABLE_ALL as i64, "All"),
        ],
    ),
    MappingFamily::new(
        "VipsForeignSubsample",
        &[
            (VIPS_FOREIGN_SUBSAMPLE_AUTO as i64, "Auto"),
            (VIPS_FOREIGN_SUBSAMPLE_ON as i64, "On"),
            (VIPS_FOREIGN_SUBSAMPLE_OFF as i64, "Off"),
        ],
    ),
    MappingFamily::new(
        "VipsForeignTiffCompression",
        &[
            (VIPS_FOREIGN_TIFF_COMPRESSION_NONE as i64, "None"),
            (VIPS_FOREIGN_TIFF_COMPRESSION_JPEG as i64, "Jpeg"),
            (VIPS_FOREIGN_TIFF_COMPRESSION_DEFLATE as i64, "Deflate"),
            (VIPS_FOREIGN_TIFF_COMPRESSION_PACKBITS as i64, "Packbits"),
            (VIPS_FOREIGN_TIFF_COMPRESSION_CCITTFAX4 as i64, "Ccittfax4"),
            (VIPS_FOREIGN_TIFF_COMPRESSION_LZW as i64, "Lzw"),
            (VIPS_FOREIGN_TIFF_COMPRESSION_WEBP as i64, "Webp"),
            (VIPS_FOREIGN_TIFF_COMPRESSION_ZSTD as i64, "Zstd"),
            (VIPS_FOREIGN_TIFF_COMPRESSION_JP2K as i64, "Jp2k"),
        ],
    ),
    MappingFamily::new(
        "VipsForeignTiffPredictor",
        &[
            (VIPS_FOREIGN_TIFF_PREDICTOR_NONE as i64, "None"),
            (VIPS_FOREIGN_TIFF_PREDICTOR_HORIZONTAL as i64, "Horizontal"),
            (VIPS_FOREIGN_TIFF_PREDICTOR_FLOAT as i64, "Float"),
        ],
    ),
    MappingFamily::new(
        "VipsForeignTiffResunit",
        &[
            (VIPS_FOREIGN_TIFF_RESUNIT_CM as i64, "Cm"),
            (VIPS_FOREIGN_TIFF_RESUNIT_INCH as i64, "Inch"),
        ],
    ),
    MappingFamily::new(
        "VipsForeignWebpPreset",
        &[
            (VIPS_FOREIGN_WEBP_PRESET_DEFAULT as i64, "Default"),
            (VIPS_FOREIGN_WEBP_PRESET_PICTURE as i64, "Picture"),
            (VIPS_FOREIGN_WEBP_PRESET_PHOTO as i64, "Photo"),
            (VIPS_FOREIGN_WEBP_PRESET_DRAWING as i64, "Drawing"),
            (VIPS_FOREIGN_WEBP_PRESET_ICON as i64, "Icon"),
            (VIPS_FOREIGN_WEBP_PRESET_TEXT as i64, "Text"),
        ],
    ),
    MappingFamily::new(
        "VipsImageType",
        &[
            (VIPS_IMAGE_ERROR as i64, "ImageError"),
            (VIPS_IMAGE_NONE as i64, "ImageNone"),
            (VIPS_IMAGE_SETBUF as i64, "ImageSetbuf"),
            (VIPS_IMAGE_SETBUF_FOREIGN as i64, "ImageSetbufForeign"),
            (VIPS_IMAGE_OPENIN as i64, "ImageOpenin"),
            (VIPS_IMAGE_MMAPIN as i64, "ImageMmapin"),
            (VIPS_IMAGE_MMAPINRW as i64, "ImageMmapinrw"),
            (VIPS_IMAGE_OPENOUT as i64, "ImageOpenout"),
            (VIPS_IMAGE_PARTIAL as i64, "ImagePartial"),
        ],
    ),
    MappingFamily::new(
        "VipsIntent",
        &[
            (VIPS_INTENT_PERCEPTUAL as i64, "Perceptual"),
            (VIPS_INTENT_RELATIVE as i64, "Relative"),
            (VIPS_INTENT_SATURATION as i64, "Saturation"),
            (VIPS_INTENT_ABSOLUTE as i64, "Absolute"),
            (VIPS_INTENT_AUTO as i64, "Auto"),
        ],
    ),
    MappingFamily::new(
        "VipsInteresting",
        &[
            (VIPS_INTERESTING_NONE as i64, "None"),
            (VIPS_INTERESTING_CENTRE as i64, "Centre"),
            (VIPS_INTERESTING_ENTROPY as i64, "Entropy"),
            (VIPS_INTERESTING_ATTENTION as i64, "Attention"),
            (VIPS_INTERESTING_LOW as i64, "Low"),
            (VIPS_INTERESTING_HIGH as i64, "High"),
            (VIPS_INTERESTING_ALL as i64, "All"),
        ],
    ),
    MappingFamily::new(
        "VipsInterpretation",
        &[
            (VIPS_INTERPRETATION_ERROR as i64, "Error"),
            (VIPS_INTERPRETATION_MULTIBAND as i64, "Multiband"),
            (VIPS_INTERPRETATION_B_W as i64, "BW"),
            (VIPS_INTERPRETATION_HISTOGRAM as i64, "Histogram"),
            (VIPS_INTERPRETATION_XYZ as i64, "Xyz"),
            (VIPS_INTERPRETATION_LAB as i64, "Lab"),
            (VIPS_INTERPRETATION_CMYK as i64, "Cmyk"),
            (VIPS_INTERPRETATION_LABQ as i64, "Labq"),
            (VIPS_INTERPRETATION_RGB as i64, "Rgb"),
            (VIPS_INTERPRETATION_CMC as i64, "Cmc"),
            (VIPS_INTERPRETATION_LCH as i64, "Lch"),
            (VIPS_INTERPRETATION_LABS as i64, "Labs"),
            (VIPS_INTERPRETATION_sRGB as i64, "Srgb"),
            (VIPS_INTERPRETATION_YXY as i64, "Yxy"),
            (VIPS_INTERPRETATION_FOURIER as i64, "Fourier"),
            (VIPS_INTERPRETATION_RGB16 as i64, "Rgb16"),
            (VIPS_INTERPRETATION_GREY16 as i64, "Grey16"),
            (VIPS_INTERPRETATION_MATRIX as i64, "Matrix"),
            (VIPS_INTERPRETATION_scRGB as i64, "Scrgb"),
            (VIPS_INTERPRETATION_HSV as i64, "Hsv"),
            (VIPS_INTERPRETATION_OKLAB as i64, "Oklab"),
            (VIPS_INTERPRETATION_OKLCH as i64, "Oklch"),
        ],
    ),
    MappingFamily::new(
        "VipsKernel",
        &[
            (VIPS_KERNEL_NEAREST as i64, "Nearest"),
            (VIPS_KERNEL_LINEAR as i64, "Linear"),
            (VIPS_KERNEL_CUBIC as i64, "Cubic"),
            (VIPS_KERNEL_MITCHELL as i64, "Mitchell"),
            (VIPS_KERNEL_LANCZOS2 as i64, "Lanczos2"),
            (VIPS_KERNEL_LANCZOS3 as i64, "Lanczos3"),
            (VIPS_KERNEL_MKS2013 as i64, "Mks2013"),
            (VIPS_KERNEL_MKS2021 as i64, "Mks2021"),
        ],
    ),
    MappingFamily::new(
        "VipsOperationBoolean",
        &[
            (VIPS_OPERATION_BOOLEAN_AND as i64, "And"),
            (VIPS_OPERATION_BOOLEAN_OR as i64, "Or"),
            (VIPS_OPERATION_BOOLEAN_EOR as i64, "Eor"),
            (VIPS_OPERATION_BOOLEAN_LSHIFT as i64, "Lshift"),
            (VIPS_OPERATION_BOOLEAN_RSHIFT as i64, "Rshift"),
        ],
    ),
    MappingFamily::new(
        "VipsOperationComplex",
        &[
            (VIPS_OPERATION_COMPLEX_POLAR as i64, "Polar"),
            (VIPS_OPERATION_COMPLEX_RECT as i64, "Rect"),
            (VIPS_OPERATION_COMPLEX_CONJ as i64, "Conj"),
        ],
    ),
    MappingFamily::new(
        "VipsOperationComplex2",
        &[
            (VIPS_OPERATION_COMPLEX2_CROSS_PHASE as i64, "CrossPhase"),
        ],
    ),
    MappingFamily::new(
        "VipsOperationComplexget",
        &[
            (VIPS_OPERATION_COMPLEXGET_REAL as i64, "Real"),
            (VIPS_OPERATION_COMPLEXGET_IMAG as i64, "Imag"),
        ],
    ),
    MappingFamily::new(
        "VipsOperationFlags",
        &[
            (VIPS_OPERATION_NONE as i64, "OperationNone"),
            (VIPS_OPERATION_SEQUENTIAL as i64, "OperationSequential"),
            (VIPS_OPERATION_SEQUENTIAL_UNBUFFERED as i64, "OperationSequentialUnbuffered"),
            (VIPS_OPERATION_NOCACHE as i64, "OperationNocache"),
            (VIPS_OPERATION_DEPRECATED as i64, "OperationDeprecated"),
            (VIPS_OPERATION_UNTRUSTED as i64, "OperationUntrusted"),
            (VIPS_OPERATION_BLOCKED as i64, "OperationBlocked"),
            (VIPS_OPERATION_REVALIDATE as i64, "OperationRevalidate"),
        ],
    ),
    MappingFamily::new(
        "VipsOperationMath",
        &[
            (VIPS_OPERATION_MATH_SIN as i64, "Sin"),
            (VIPS_OPERATION_MATH_COS as i64, "Cos"),
            (VIPS_OPERATION_MATH_TAN as i64, "Tan"),
            (VIPS_OPERATION_MATH_ASIN as i64, "Asin"),
            (VIPS_OPERATION_MATH_ACOS as i64, "Acos"),
            (VIPS_OPERATION_MATH_ATAN as i64, "Atan"),
            (VIPS_OPERATION_MATH_LOG as i64, "Log"),
            (VIPS_OPERATION_MATH_LOG10 as i64, "Log10"),
            (VIPS_OPERATION_MATH_EXP as i64, "Exp"),
            (VIPS_OPERATION_MATH_EXP10 as i64, "Exp10"),
            (VIPS_OPERATION_MATH_SINH as i64, "Sinh"),
            (VIPS_OPERATION_MATH_COSH as i64, "Cosh"),
            (VIPS_OPERATION_MATH_TANH as i64, "Tanh"),
            (VIPS_OPERATION_MATH_ASINH as i64, "Asinh"),
            (VIPS_OPERATION_MATH_ACOSH as i64, "Acosh"),
            (VIPS_OPERATION_MATH_ATANH as i64, "Atanh"),
        ],
    ),
    MappingFamily::new(
        "VipsOperationMath2",
        &[
            (VIPS_OPERATION_MATH2_POW as i64, "Pow"),
            (VIPS_OPERATION_MATH2_WOP as i64, "Wop"),
            (VIPS_OPERATION_MATH2_ATAN2 as i64, "Atan2"),
        ],
    ),
    MappingFamily::new(
        "VipsOperationMorphology",
        &[
            (VIPS_OPERATION_MORPHOLOGY_ERODE as i64, "Erode"),
            (VIPS_OPERATION_MORPHOLOGY_DILATE as i64, "Dilate"),
        ],
    ),
    MappingFamily::new(
        "VipsOperationRelational",
        &[
            (VIPS_OPERATION_RELATIONAL_EQUAL as i64, "Equal"),
            (VIPS_OPERATION_RELATIONAL_NOTEQ as i64, "Noteq"),
            (VIPS_OPERATION_RELATIONAL_LESS as i64, "Less"),
            (VIPS_OPERATION_RELATIONAL_LESSEQ as i64, "Lesseq"),
            (VIPS_OPERATION_RELATIONAL_MORE as i64, "More"),
            (VIPS_OPERATION_RELATIONAL_MOREEQ as i64, "Moreeq"),
        ],
    ),
    MappingFamily::new(
        "VipsOperationRound",
        &[
            (VIPS_OPERATION_ROUND_RINT as i64, "Rint"),
            (VIPS_OPERATION_ROUND_CEIL as i64, "Ceil"),
            (VIPS_OPERATION_ROUND_FLOOR as i64, "Floor"),
        ],
    ),
    MappingFamily::new(
        "VipsPCS",
        &[
            (VIPS_PCS_LAB as i64, "PcsLab"),
            (VIPS_PCS_XYZ as i64, "PcsXyz"),
        ],
    ),
    MappingFamily::new(
        "VipsPrecision",
        &[
            (VIPS_PRECISION_INTEGER as i64, "Integer"),
            (VIPS_PRECISION_FLOAT as i64, "Float"),
            (VIPS_PRECISION_APPROXIMATE as i64, "Approximate"),
        ],
    ),
    MappingFamily::new(
        "VipsRegionShrink",
        &[
            (VIPS_REGION_SHRINK_MEAN as i64, "Mean"),
            (VIPS_REGION_SHRINK_MEDIAN as i64, "Median"),
            (VIPS_REGION_SHRINK_MODE as i64, "Mode"),
            (VIPS_REGION_SHRINK_MAX as i64, "Max"),
            (VIPS_REGION_SHRINK_MIN as i64, "Min"),
            (VIPS_REGION_SHRINK_NEAREST as i64, "Nearest"),
        ],
    ),
    MappingFamily::new(
        "VipsSdfShape",
        &[
            (VIPS_SDF_SHAPE_CIRCLE as i64, "Circle"),
            (VIPS_SDF_SHAPE_BOX as i64, "Box"),
            (VIPS_SDF_SHAPE_ROUNDED_BOX as i64, "RoundedBox"),
            (VIPS_SDF_SHAPE_LINE as i64, "Line"),
        ],
    ),
    MappingFamily::new(
        "VipsSize",
        &[
            (VIPS_SIZE_BOTH as i64, "Both"),
            (VIPS_SIZE_UP as i64, "Up"),
            (VIPS_SIZE_DOWN as i64, "Down"),
            (VIPS_SIZE_FORCE as i64, "Force"),
        ],
    ),
    MappingFamily::new(
        "VipsTextWrap",
        &[
            (VIPS_TEXT_WRAP_WORD as i64, "Word"),
            (VIPS_TEXT_WRAP_CHAR as i64, "Char"),
            (VIPS_TEXT_WRAP_WORD_CHAR as i64, "WordChar"),
            (VIPS_TEXT_WRAP_NONE as i64, "None"),
        ],
    ),
    MappingFamily::new(
        "VipsToken",
        &[
            (VIPS_TOKEN_LEFT as i64, "Left"),
            (VIPS_TOKEN_RIGHT as i64, "Right"),
            (VIPS_TOKEN_STRING as i64, "String"),
            (VIPS_TOKEN_EQUALS as i64, "Equals"),
            (VIPS_TOKEN_COMMA as i64, "Comma"),
        ],
    ),
];

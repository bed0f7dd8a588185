//! # vips-sys
//!
//! Enumerator constants of the native libvips headers, one `const` per C
//! enumerator and one `c_int` alias per C enum type. These are the values
//! the library is compiled with; binding enums are checked against them.

#![allow(non_upper_case_globals, non_camel_case_types)]

use std::os::raw::c_int;


pub type VipsAccess = c_int;
pub const VIPS_ACCESS_RANDOM: VipsAccess = 0;
pub const VIPS_ACCESS_SEQUENTIAL: VipsAccess = 1;
pub const VIPS_ACCESS_SEQUENTIAL_UNBUFFERED: VipsAccess = 2;

pub type VipsAlign = c_int;
pub const VIPS_ALIGN_LOW: VipsAlign = 0;
pub const VIPS_ALIGN_CENTRE: VipsAlign = 1;
pub const VIPS_ALIGN_HIGH: VipsAlign = 2;

pub type VipsAngle = c_int;
pub const VIPS_ANGLE_D0: VipsAngle = 0;
pub const VIPS_ANGLE_D90: VipsAngle = 1;
pub const VIPS_ANGLE_D180: VipsAngle = 2;
pub const VIPS_ANGLE_D270: VipsAngle = 3;

pub type VipsAngle45 = c_int;
pub const VIPS_ANGLE45_D0: VipsAngle45 = 0;
pub const VIPS_ANGLE45_D45: VipsAngle45 = 1;
pub const VIPS_ANGLE45_D90: VipsAngle45 = 2;
pub const VIPS_ANGLE45_D135: VipsAngle45 = 3;
pub const VIPS_ANGLE45_D180: VipsAngle45 = 4;
pub const VIPS_ANGLE45_D225: VipsAngle45 = 5;
pub const VIPS_ANGLE45_D270: VipsAngle45 = 6;
pub const VIPS_ANGLE45_D315: VipsAngle45 = 7;

pub type VipsArgumentFlags = c_int;
pub const VIPS_ARGUMENT_NONE: VipsArgumentFlags = 0;
pub const VIPS_ARGUMENT_REQUIRED: VipsArgumentFlags = 1;
pub const VIPS_ARGUMENT_CONSTRUCT: VipsArgumentFlags = 2;
pub const VIPS_ARGUMENT_SET_ONCE: VipsArgumentFlags = 4;
pub const VIPS_ARGUMENT_SET_ALWAYS: VipsArgumentFlags = 8;
pub const VIPS_ARGUMENT_INPUT: VipsArgumentFlags = 16;
pub const VIPS_ARGUMENT_OUTPUT: VipsArgumentFlags = 32;
pub const VIPS_ARGUMENT_DEPRECATED: VipsArgumentFlags = 64;
pub const VIPS_ARGUMENT_MODIFY: VipsArgumentFlags = 128;
pub const VIPS_ARGUMENT_NON_HASHABLE: VipsArgumentFlags = 256;

pub type VipsBandFormat = c_int;
pub const VIPS_FORMAT_NOTSET: VipsBandFormat = -1;
pub const VIPS_FORMAT_UCHAR: VipsBandFormat = 0;
pub const VIPS_FORMAT_CHAR: VipsBandFormat = 1;
pub const VIPS_FORMAT_USHORT: VipsBandFormat = 2;
pub const VIPS_FORMAT_SHORT: VipsBandFormat = 3;
pub const VIPS_FORMAT_UINT: VipsBandFormat = 4;
pub const VIPS_FORMAT_INT: VipsBandFormat = 5;
pub const VIPS_FORMAT_FLOAT: VipsBandFormat = 6;
pub const VIPS_FORMAT_COMPLEX: VipsBandFormat = 7;
pub const VIPS_FORMAT_DOUBLE: VipsBandFormat = 8;
pub const VIPS_FORMAT_DPCOMPLEX: VipsBandFormat = 9;

pub type VipsBlendMode = c_int;
pub const VIPS_BLEND_MODE_CLEAR: VipsBlendMode = 0;
pub const VIPS_BLEND_MODE_SOURCE: VipsBlendMode = 1;
pub const VIPS_BLEND_MODE_OVER: VipsBlendMode = 2;
pub const VIPS_BLEND_MODE_IN: VipsBlendMode = 3;
pub const VIPS_BLEND_MODE_OUT: VipsBlendMode = 4;
pub const VIPS_BLEND_MODE_ATOP: VipsBlendMode = 5;
pub const VIPS_BLEND_MODE_DEST: VipsBlendMode = 6;
pub const VIPS_BLEND_MODE_DEST_OVER: VipsBlendMode = 7;
pub const VIPS_BLEND_MODE_DEST_IN: VipsBlendMode = 8;
pub const VIPS_BLEND_MODE_DEST_OUT: VipsBlendMode = 9;
pub const VIPS_BLEND_MODE_DEST_ATOP: VipsBlendMode = 10;
pub const VIPS_BLEND_MODE_XOR: VipsBlendMode = 11;
pub const VIPS_BLEND_MODE_ADD: VipsBlendMode = 12;
pub const VIPS_BLEND_MODE_SATURATE: VipsBlendMode = 13;
pub const VIPS_BLEND_MODE_MULTIPLY: VipsBlendMode = 14;
pub const VIPS_BLEND_MODE_SCREEN: VipsBlendMode = 15;
pub const VIPS_BLEND_MODE_OVERLAY: VipsBlendMode = 16;
pub const VIPS_BLEND_MODE_DARKEN: VipsBlendMode = 17;
pub const VIPS_BLEND_MODE_LIGHTEN: VipsBlendMode = 18;
pub const VIPS_BLEND_MODE_COLOUR_DODGE: VipsBlendMode = 19;
pub const VIPS_BLEND_MODE_COLOUR_BURN: VipsBlendMode = 20;
pub const VIPS_BLEND_MODE_HARD_LIGHT: VipsBlendMode = 21;
pub const VIPS_BLEND_MODE_SOFT_LIGHT: VipsBlendMode = 22;
pub const VIPS_BLEND_MODE_DIFFERENCE: VipsBlendMode = 23;
pub const VIPS_BLEND_MODE_EXCLUSION: VipsBlendMode = 24;

pub type VipsCoding = c_int;
pub const VIPS_CODING_ERROR: VipsCoding = -1;
pub const VIPS_CODING_NONE: VipsCoding = 0;
pub const VIPS_CODING_LABQ: VipsCoding = 2;
pub const VIPS_CODING_RAD: VipsCoding = 6;

pub type VipsCombine = c_int;
pub const VIPS_COMBINE_MAX: VipsCombine = 0;
pub const VIPS_COMBINE_SUM: VipsCombine = 1;
pub const VIPS_COMBINE_MIN: VipsCombine = 2;

pub type VipsCombineMode = c_int;
pub const VIPS_COMBINE_MODE_SET: VipsCombineMode = 0;
pub const VIPS_COMBINE_MODE_ADD: VipsCombineMode = 1;

pub type VipsCompassDirection = c_int;
pub const VIPS_COMPASS_DIRECTION_CENTRE: VipsCompassDirection = 0;
pub const VIPS_COMPASS_DIRECTION_NORTH: VipsCompassDirection = 1;
pub const VIPS_COMPASS_DIRECTION_EAST: VipsCompassDirection = 2;
pub const VIPS_COMPASS_DIRECTION_SOUTH: VipsCompassDirection = 3;
pub const VIPS_COMPASS_DIRECTION_WEST: VipsCompassDirection = 4;
pub const VIPS_COMPASS_DIRECTION_NORTH_EAST: VipsCompassDirection = 5;
pub const VIPS_COMPASS_DIRECTION_SOUTH_EAST: VipsCompassDirection = 6;
pub const VIPS_COMPASS_DIRECTION_SOUTH_WEST: VipsCompassDirection = 7;
pub const VIPS_COMPASS_DIRECTION_NORTH_WEST: VipsCompassDirection = 8;

pub type VipsDemandStyle = c_int;
pub const VIPS_DEMAND_STYLE_ERROR: VipsDemandStyle = -1;
pub const VIPS_DEMAND_STYLE_SMALLTILE: VipsDemandStyle = 0;
pub const VIPS_DEMAND_STYLE_FATSTRIP: VipsDemandStyle = 1;
pub const VIPS_DEMAND_STYLE_THINSTRIP: VipsDemandStyle = 2;
pub const VIPS_DEMAND_STYLE_ANY: VipsDemandStyle = 3;

pub type VipsDirection = c_int;
pub const VIPS_DIRECTION_HORIZONTAL: VipsDirection = 0;
pub const VIPS_DIRECTION_VERTICAL: VipsDirection = 1;

pub type VipsExtend = c_int;
pub const VIPS_EXTEND_BLACK: VipsExtend = 0;
pub const VIPS_EXTEND_COPY: VipsExtend = 1;
pub const VIPS_EXTEND_REPEAT: VipsExtend = 2;
pub const VIPS_EXTEND_MIRROR: VipsExtend = 3;
pub const VIPS_EXTEND_WHITE: VipsExtend = 4;
pub const VIPS_EXTEND_BACKGROUND: VipsExtend = 5;

pub type VipsFailOn = c_int;
pub const VIPS_FAIL_ON_NONE: VipsFailOn = 0;
pub const VIPS_FAIL_ON_TRUNCATED: VipsFailOn = 1;
pub const VIPS_FAIL_ON_ERROR: VipsFailOn = 2;
pub const VIPS_FAIL_ON_WARNING: VipsFailOn = 3;

pub type VipsForeignCoding = c_int;
pub const VIPS_FOREIGN_CODING_NONE: VipsForeignCoding = 1;
pub const VIPS_FOREIGN_CODING_LABQ: VipsForeignCoding = 2;
pub const VIPS_FOREIGN_CODING_RAD: VipsForeignCoding = 4;
pub const VIPS_FOREIGN_CODING_ALL: VipsForeignCoding = 7;

pub type VipsForeignDzContainer = c_int;
pub const VIPS_FOREIGN_DZ_CONTAINER_FS: VipsForeignDzContainer = 0;
pub const VIPS_FOREIGN_DZ_CONTAINER_ZIP: VipsForeignDzContainer = 1;
pub const VIPS_FOREIGN_DZ_CONTAINER_SZI: VipsForeignDzContainer = 2;

pub type VipsForeignDzDepth = c_int;
pub const VIPS_FOREIGN_DZ_DEPTH_ONEPIXEL: VipsForeignDzDepth = 0;
pub const VIPS_FOREIGN_DZ_DEPTH_ONETILE: VipsForeignDzDepth = 1;
pub const VIPS_FOREIGN_DZ_DEPTH_ONE: VipsForeignDzDepth = 2;

pub type VipsForeignDzLayout = c_int;
pub const VIPS_FOREIGN_DZ_LAYOUT_DZ: VipsForeignDzLayout = 0;
pub const VIPS_FOREIGN_DZ_LAYOUT_ZOOMIFY: VipsForeignDzLayout = 1;
pub const VIPS_FOREIGN_DZ_LAYOUT_GOOGLE: VipsForeignDzLayout = 2;
pub const VIPS_FOREIGN_DZ_LAYOUT_IIIF: VipsForeignDzLayout = 3;
pub const VIPS_FOREIGN_DZ_LAYOUT_IIIF3: VipsForeignDzLayout = 4;

pub type VipsForeignFlags = c_int;
pub const VIPS_FOREIGN_NONE: VipsForeignFlags = 0;
pub const VIPS_FOREIGN_PARTIAL: VipsForeignFlags = 1;
pub const VIPS_FOREIGN_BIGENDIAN: VipsForeignFlags = 2;
pub const VIPS_FOREIGN_SEQUENTIAL: VipsForeignFlags = 4;
pub const VIPS_FOREIGN_ALL: VipsForeignFlags = 7;

pub type VipsForeignHeifCompression = c_int;
pub const VIPS_FOREIGN_HEIF_COMPRESSION_HEVC: VipsForeignHeifCompression = 1;
pub const VIPS_FOREIGN_HEIF_COMPRESSION_AVC: VipsForeignHeifCompression = 2;
pub const VIPS_FOREIGN_HEIF_COMPRESSION_JPEG: VipsForeignHeifCompression = 3;
pub const VIPS_FOREIGN_HEIF_COMPRESSION_AV1: VipsForeignHeifCompression = 4;

pub type VipsForeignHeifEncoder = c_int;
pub const VIPS_FOREIGN_HEIF_ENCODER_AUTO: VipsForeignHeifEncoder = 0;
pub const VIPS_FOREIGN_HEIF_ENCODER_AOM: VipsForeignHeifEncoder = 1;
pub const VIPS_FOREIGN_HEIF_ENCODER_RAV1E: VipsForeignHeifEncoder = 2;
pub const VIPS_FOREIGN_HEIF_ENCODER_SVT: VipsForeignHeifEncoder = 3;
pub const VIPS_FOREIGN_HEIF_ENCODER_X265: VipsForeignHeifEncoder = 4;

pub type VipsForeignJpegSubsample = c_int;
pub const VIPS_FOREIGN_JPEG_SUBSAMPLE_AUTO: VipsForeignJpegSubsample = 0;
pub const VIPS_FOREIGN_JPEG_SUBSAMPLE_ON: VipsForeignJpegSubsample = 1;
pub const VIPS_FOREIGN_JPEG_SUBSAMPLE_OFF: VipsForeignJpegSubsample = 2;

pub type VipsForeignKeep = c_int;
pub const VIPS_FOREIGN_KEEP_NONE: VipsForeignKeep = 0;
pub const VIPS_FOREIGN_KEEP_EXIF: VipsForeignKeep = 1;
pub const VIPS_FOREIGN_KEEP_XMP: VipsForeignKeep = 2;
pub const VIPS_FOREIGN_KEEP_IPTC: VipsForeignKeep = 4;
pub const VIPS_FOREIGN_KEEP_ICC: VipsForeignKeep = 8;
pub const VIPS_FOREIGN_KEEP_OTHER: VipsForeignKeep = 16;
pub const VIPS_FOREIGN_KEEP_GAINMAP: VipsForeignKeep = 32;
pub const VIPS_FOREIGN_KEEP_ALL: VipsForeignKeep = 63;

pub type VipsForeignPdfPageBox = c_int;
pub const VIPS_FOREIGN_PDF_PAGE_BOX_MEDIA: VipsForeignPdfPageBox = 0;
pub const VIPS_FOREIGN_PDF_PAGE_BOX_CROP: VipsForeignPdfPageBox = 1;
pub const VIPS_FOREIGN_PDF_PAGE_BOX_TRIM: VipsForeignPdfPageBox = 2;
pub const VIPS_FOREIGN_PDF_PAGE_BOX_BLEED: VipsForeignPdfPageBox = 3;
pub const VIPS_FOREIGN_PDF_PAGE_BOX_ART: VipsForeignPdfPageBox = 4;

pub type VipsForeignPngFilter = c_int;
pub const VIPS_FOREIGN_PNG_FILTER_NONE: VipsForeignPngFilter = 8;
pub const VIPS_FOREIGN_PNG_FILTER_SUB: VipsForeignPngFilter = 16;
pub const VIPS_FOREIGN_PNG_FILTER_UP: VipsForeignPngFilter = 32;
pub const VIPS_FOREIGN_PNG_FILTER_AVG: VipsForeignPngFilter = 64;
pub const VIPS_FOREIGN_PNG_FILTER_PAETH: VipsForeignPngFilter = 128;
pub const VIPS_FOREIGN_PNG_FILTER_ALL: VipsForeignPngFilter = 248;

pub type VipsForeignPpmFormat = c_int;
pub const VIPS_FOREIGN_PPM_FORMAT_PBM: VipsForeignPpmFormat = 0;
pub const VIPS_FOREIGN_PPM_FORMAT_PGM: VipsForeignPpmFormat = 1;
pub const VIPS_FOREIGN_PPM_FORMAT_PPM: VipsForeignPpmFormat = 2;
pub const VIPS_FOREIGN_PPM_FORMAT_PFM: VipsForeignPpmFormat = 3;
pub const VIPS_FOREIGN_PPM_FORMAT_PNM: VipsForeignPpmFormat = 4;

pub type VipsForeignSaveable = c_int;
pub const VIPS_FOREIGN_SAVEABLE_ANY: VipsForeignSaveable = 0;
pub const VIPS_FOREIGN_SAVEABLE_MONO: VipsForeignSaveable = 1;
pub const VIPS_FOREIGN_SAVEABLE_RGB: VipsForeignSaveable = 2;
pub const VIPS_FOREIGN_SAVEABLE_CMYK: VipsForeignSaveable = 4;
pub const VIPS_FOREIGN_SAVEABLE_ALPHA: VipsForeignSaveable = 8;
pub const VIPS_FOREIGN_SAVEABLE_ALL: VipsForeignSaveable = 15;

pub type VipsForeignSubsample = c_int;
pub const VIPS_FOREIGN_SUBSAMPLE_AUTO: VipsForeignSubsample = 0;
pub const VIPS_FOREIGN_SUBSAMPLE_ON: VipsForeignSubsample = 1;
pub const VIPS_FOREIGN_SUBSAMPLE_OFF: VipsForeignSubsample = 2;

pub type VipsForeignTiffCompression = c_int;
pub const VIPS_FOREIGN_TIFF_COMPRESSION_NONE: VipsForeignTiffCompression = 0;
pub const VIPS_FOREIGN_TIFF_COMPRESSION_JPEG: VipsForeignTiffCompression = 1;
pub const VIPS_FOREIGN_TIFF_COMPRESSION_DEFLATE: VipsForeignTiffCompression = 2;
pub const VIPS_FOREIGN_TIFF_COMPRESSION_PACKBITS: VipsForeignTiffCompression = 3;
pub const VIPS_FOREIGN_TIFF_COMPRESSION_CCITTFAX4: VipsForeignTiffCompression = 4;
pub const VIPS_FOREIGN_TIFF_COMPRESSION_LZW: VipsForeignTiffCompression = 5;
pub const VIPS_FOREIGN_TIFF_COMPRESSION_WEBP: VipsForeignTiffCompression = 6;
pub const VIPS_FOREIGN_TIFF_COMPRESSION_ZSTD: VipsForeignTiffCompression = 7;
pub const VIPS_FOREIGN_TIFF_COMPRESSION_JP2K: VipsForeignTiffCompression = 8;

pub type VipsForeignTiffPredictor = c_int;
pub const VIPS_FOREIGN_TIFF_PREDICTOR_NONE: VipsForeignTiffPredictor = 1;
pub const VIPS_FOREIGN_TIFF_PREDICTOR_HORIZONTAL: VipsForeignTiffPredictor = 2;
pub const VIPS_FOREIGN_TIFF_PREDICTOR_FLOAT: VipsForeignTiffPredictor = 3;

pub type VipsForeignTiffResunit = c_int;
pub const VIPS_FOREIGN_TIFF_RESUNIT_CM: VipsForeignTiffResunit = 0;
pub const VIPS_FOREIGN_TIFF_RESUNIT_INCH: VipsForeignTiffResunit = 1;

pub type VipsForeignWebpPreset = c_int;
pub const VIPS_FOREIGN_WEBP_PRESET_DEFAULT: VipsForeignWebpPreset = 0;
pub const VIPS_FOREIGN_WEBP_PRESET_PICTURE: VipsForeignWebpPreset = 1;
pub const VIPS_FOREIGN_WEBP_PRESET_PHOTO: VipsForeignWebpPreset = 2;
pub const VIPS_FOREIGN_WEBP_PRESET_DRAWING: VipsForeignWebpPreset = 3;
pub const VIPS_FOREIGN_WEBP_PRESET_ICON: VipsForeignWebpPreset = 4;
pub const VIPS_FOREIGN_WEBP_PRESET_TEXT: VipsForeignWebpPreset = 5;

pub type VipsImageType = c_int;
pub const VIPS_IMAGE_ERROR: VipsImageType = -1;
pub const VIPS_IMAGE_NONE: VipsImageType = 0;
pub const VIPS_IMAGE_SETBUF: VipsImageType = 1;
pub const VIPS_IMAGE_SETBUF_FOREIGN: VipsImageType = 2;
pub const VIPS_IMAGE_OPENIN: VipsImageType = 3;
pub const VIPS_IMAGE_MMAPIN: VipsImageType = 4;
pub const VIPS_IMAGE_MMAPINRW: VipsImageType = 5;
pub const VIPS_IMAGE_OPENOUT: VipsImageType = 6;
pub const VIPS_IMAGE_PARTIAL: VipsImageType = 7;

pub type VipsIntent = c_int;
pub const VIPS_INTENT_PERCEPTUAL: VipsIntent = 0;
pub const VIPS_INTENT_RELATIVE: VipsIntent = 1;
pub const VIPS_INTENT_SATURATION: VipsIntent = 2;
pub const VIPS_INTENT_ABSOLUTE: VipsIntent = 3;
pub const VIPS_INTENT_AUTO: VipsIntent = 32;

pub type VipsInteresting = c_int;
pub const VIPS_INTERESTING_NONE: VipsInteresting = 0;
pub const VIPS_INTERESTING_CENTRE: VipsInteresting = 1;
pub const VIPS_INTERESTING_ENTROPY: VipsInteresting = 2;
pub const VIPS_INTERESTING_ATTENTION: VipsInteresting = 3;
pub const VIPS_INTERESTING_LOW: VipsInteresting = 4;
pub const VIPS_INTERESTING_HIGH: VipsInteresting = 5;
pub const VIPS_INTERESTING_ALL: VipsInteresting = 6;

pub type VipsInterpretation = c_int;
pub const VIPS_INTERPRETATION_ERROR: VipsInterpretation = -1;
pub const VIPS_INTERPRETATION_MULTIBAND: VipsInterpretation = 0;
pub const VIPS_INTERPRETATION_B_W: VipsInterpretation = 1;
pub const VIPS_INTERPRETATION_HISTOGRAM: VipsInterpretation = 10;
pub const VIPS_INTERPRETATION_XYZ: VipsInterpretation = 12;
pub const VIPS_INTERPRETATION_LAB: VipsInterpretation = 13;
pub const VIPS_INTERPRETATION_CMYK: VipsInterpretation = 15;
pub const VIPS_INTERPRETATION_LABQ: VipsInterpretation = 16;
pub const VIPS_INTERPRETATION_RGB: VipsInterpretation = 17;
pub const VIPS_INTERPRETATION_CMC: VipsInterpretation = 18;
pub const VIPS_INTERPRETATION_LCH: VipsInterpretation = 19;
pub const VIPS_INTERPRETATION_LABS: VipsInterpretation = 21;
pub const VIPS_INTERPRETATION_sRGB: VipsInterpretation = 22;
pub const VIPS_INTERPRETATION_YXY: VipsInterpretation = 23;
pub const VIPS_INTERPRETATION_FOURIER: VipsInterpretation = 24;
pub const VIPS_INTERPRETATION_RGB16: VipsInterpretation = 25;
pub const VIPS_INTERPRETATION_GREY16: VipsInterpretation = 26;
pub const VIPS_INTERPRETATION_MATRIX: VipsInterpretation = 27;
pub const VIPS_INTERPRETATION_scRGB: VipsInterpretation = 28;
pub const VIPS_INTERPRETATION_HSV: VipsInterpretation = 29;
pub const VIPS_INTERPRETATION_OKLAB: VipsInterpretation = 30;
pub const VIPS_INTERPRETATION_OKLCH: VipsInterpretation = 31;

pub type VipsKernel = c_int;
pub const VIPS_KERNEL_NEAREST: VipsKernel = 0;
pub const VIPS_KERNEL_LINEAR: VipsKernel = 1;
pub const VIPS_KERNEL_CUBIC: VipsKernel = 2;
pub const VIPS_KERNEL_MITCHELL: VipsKernel = 3;
pub const VIPS_KERNEL_LANCZOS2: VipsKernel = 4;
pub const VIPS_KERNEL_LANCZOS3: VipsKernel = 5;
pub const VIPS_KERNEL_MKS2013: VipsKernel = 6;
pub const VIPS_KERNEL_MKS2021: VipsKernel = 7;

pub type VipsOperationBoolean = c_int;
pub const VIPS_OPERATION_BOOLEAN_AND: VipsOperationBoolean = 0;
pub const VIPS_OPERATION_BOOLEAN_OR: VipsOperationBoolean = 1;
pub const VIPS_OPERATION_BOOLEAN_EOR: VipsOperationBoolean = 2;
pub const VIPS_OPERATION_BOOLEAN_LSHIFT: VipsOperationBoolean = 3;
pub const VIPS_OPERATION_BOOLEAN_RSHIFT: VipsOperationBoolean = 4;

pub type VipsOperationComplex = c_int;
pub const VIPS_OPERATION_COMPLEX_POLAR: VipsOperationComplex = 0;
pub const VIPS_OPERATION_COMPLEX_RECT: VipsOperationComplex = 1;
pub const VIPS_OPERATION_COMPLEX_CONJ: VipsOperationComplex = 2;

pub type VipsOperationComplex2 = c_int;
pub const VIPS_OPERATION_COMPLEX2_CROSS_PHASE: VipsOperationComplex2 = 0;

pub type VipsOperationComplexget = c_int;
pub const VIPS_OPERATION_COMPLEXGET_REAL: VipsOperationComplexget = 0;
pub const VIPS_OPERATION_COMPLEXGET_IMAG: VipsOperationComplexget = 1;

pub type VipsOperationFlags = c_int;
pub const VIPS_OPERATION_NONE: VipsOperationFlags = 0;
pub const VIPS_OPERATION_SEQUENTIAL: VipsOperationFlags = 1;
pub const VIPS_OPERATION_SEQUENTIAL_UNBUFFERED: VipsOperationFlags = 2;
pub const VIPS_OPERATION_NOCACHE: VipsOperationFlags = 4;
pub const VIPS_OPERATION_DEPRECATED: VipsOperationFlags = 8;
pub const VIPS_OPERATION_UNTRUSTED: VipsOperationFlags = 16;
pub const VIPS_OPERATION_BLOCKED: VipsOperationFlags = 32;
pub const VIPS_OPERATION_REVALIDATE: VipsOperationFlags = 64;

pub type VipsOperationMath = c_int;
pub const VIPS_OPERATION_MATH_SIN: VipsOperationMath = 0;
pub const VIPS_OPERATION_MATH_COS: VipsOperationMath = 1;
pub const VIPS_OPERATION_MATH_TAN: VipsOperationMath = 2;
pub const VIPS_OPERATION_MATH_ASIN: VipsOperationMath = 3;
pub const VIPS_OPERATION_MATH_ACOS: VipsOperationMath = 4;
pub const VIPS_OPERATION_MATH_ATAN: VipsOperationMath = 5;
pub const VIPS_OPERATION_MATH_LOG: VipsOperationMath = 6;
pub const VIPS_OPERATION_MATH_LOG10: VipsOperationMath = 7;
pub const VIPS_OPERATION_MATH_EXP: VipsOperationMath = 8;
pub const VIPS_OPERATION_MATH_EXP10: VipsOperationMath = 9;
pub const VIPS_OPERATION_MATH_SINH: VipsOperationMath = 10;
pub const VIPS_OPERATION_MATH_COSH: VipsOperationMath = 11;
pub const VIPS_OPERATION_MATH_TANH: VipsOperationMath = 12;
pub const VIPS_OPERATION_MATH_ASINH: VipsOperationMath = 13;
pub const VIPS_OPERATION_MATH_ACOSH: VipsOperationMath = 14;
pub const VIPS_OPERATION_MATH_ATANH: VipsOperationMath = 15;

pub type VipsOperationMath2 = c_int;
pub const VIPS_OPERATION_MATH2_POW: VipsOperationMath2 = 0;
pub const VIPS_OPERATION_MATH2_WOP: VipsOperationMath2 = 1;
pub const VIPS_OPERATION_MATH2_ATAN2: VipsOperationMath2 = 2;

pub type VipsOperationMorphology = c_int;
pub const VIPS_OPERATION_MORPHOLOGY_ERODE: VipsOperationMorphology = 0;
pub const VIPS_OPERATION_MORPHOLOGY_DILATE: VipsOperationMorphology = 1;

pub type VipsOperationRelational = c_int;
pub const VIPS_OPERATION_RELATIONAL_EQUAL: VipsOperationRelational = 0;
pub const VIPS_OPERATION_RELATIONAL_NOTEQ: VipsOperationRelational = 1;
pub const VIPS_OPERATION_RELATIONAL_LESS: VipsOperationRelational = 2;
pub const VIPS_OPERATION_RELATIONAL_LESSEQ: VipsOperationRelational = 3;
pub const VIPS_OPERATION_RELATIONAL_MORE: VipsOperationRelational = 4;
pub const VIPS_OPERATION_RELATIONAL_MOREEQ: VipsOperationRelational = 5;

pub type VipsOperationRound = c_int;
pub const VIPS_OPERATION_ROUND_RINT: VipsOperationRound = 0;
pub const VIPS_OPERATION_ROUND_CEIL: VipsOperationRound = 1;
pub const VIPS_OPERATION_ROUND_FLOOR: VipsOperationRound = 2;

pub type VipsPCS = c_int;
pub const VIPS_PCS_LAB: VipsPCS = 0;
pub const VIPS_PCS_XYZ: VipsPCS = 1;

pub type VipsPrecision = c_int;
pub const VIPS_PRECISION_INTEGER: VipsPrecision = 0;
pub const VIPS_PRECISION_FLOAT: VipsPrecision = 1;
pub const VIPS_PRECISION_APPROXIMATE: VipsPrecision = 2;

pub type VipsRegionShrink = c_int;
pub const VIPS_REGION_SHRINK_MEAN: VipsRegionShrink = 0;
pub const VIPS_REGION_SHRINK_MEDIAN: VipsRegionShrink = 1;
pub const VIPS_REGION_SHRINK_MODE: VipsRegionShrink = 2;
pub const VIPS_REGION_SHRINK_MAX: VipsRegionShrink = 3;
pub const VIPS_REGION_SHRINK_MIN: VipsRegionShrink = 4;
pub const VIPS_REGION_SHRINK_NEAREST: VipsRegionShrink = 5;

pub type VipsSdfShape = c_int;
pub const VIPS_SDF_SHAPE_CIRCLE: VipsSdfShape = 0;
pub const VIPS_SDF_SHAPE_BOX: VipsSdfShape = 1;
pub const VIPS_SDF_SHAPE_ROUNDED_BOX: VipsSdfShape = 2;
pub const VIPS_SDF_SHAPE_LINE: VipsSdfShape = 3;

pub type VipsSize = c_int;
pub const VIPS_SIZE_BOTH: VipsSize = 0;
pub const VIPS_SIZE_UP: VipsSize = 1;
pub const VIPS_SIZE_DOWN: VipsSize = 2;
pub const VIPS_SIZE_FORCE: VipsSize = 3;

pub type VipsTextWrap = c_int;
pub const VIPS_TEXT_WRAP_WORD: VipsTextWrap = 0;
pub const VIPS_TEXT_WRAP_CHAR: VipsTextWrap = 1;
pub const VIPS_TEXT_WRAP_WORD_CHAR: VipsTextWrap = 2;
pub const VIPS_TEXT_WRAP_NONE: VipsTextWrap = 3;

pub type VipsToken = c_int;
pub const VIPS_TOKEN_LEFT: VipsToken = 1;
pub const VIPS_TOKEN_RIGHT: VipsToken = 2;
pub const VIPS_TOKEN_STRING: VipsToken = 3;
pub const VIPS_TOKEN_EQUALS: VipsToken = 4;
pub const VIPS_TOKEN_COMMA: VipsToken = 5;

//! Literal catalog for the malformed `signingConfigs` block in
//! `android/app/build.gradle`.
//!
//! The broken file is missing the closing brace of the `debug` signing
//! config, so `release {` opens inside it. Three mutually exclusive
//! repairs are catalogued here; each assumes a different exact prior
//! state of the file and none of them parses gradle syntax.

use crate::patch::line_range::LineRangeRewrite;
use crate::patch::substring::SubstringPatch;

/// Build script targeted by every tool.
pub const BUILD_GRADLE_PATH: &str = "android/app/build.gradle";

/// Diagnostic file written by the excerpt tool.
pub const STRUCTURE_PATH: &str = "structure.txt";

/// 1-based inclusive line range covered by the default excerpt.
pub const EXCERPT_FIRST_LINE: usize = 131;
pub const EXCERPT_LAST_LINE: usize = 151;

/// Character window dumped when the signing block cannot be found.
pub const DUMP_WINDOW_START: usize = 1000;
pub const DUMP_WINDOW_LEN: usize = 1000;

/// Brace-opening tokens worth flagging during inspection.
pub const BLOCK_KEYWORDS: &[&str] = &[
    "signingConfigs {",
    "buildTypes {",
    "release {",
    "debug {",
    "defaultConfig {",
];

/// The signingConfigs body as it appears in the broken file.
const SIGNING_BAD_BLOCK: &str = r#"    signingConfigs {
        debug {
            storeFile file('debug.keystore')
            storePassword 'android'
            keyAlias 'androiddebugkey'
            keyPassword 'android'
        release {
            if (project.hasProperty('MYAPP_UPLOAD_STORE_FILE')) {
                storeFile file(MYAPP_UPLOAD_STORE_FILE)
                storePassword MYAPP_UPLOAD_STORE_PASSWORD
                keyAlias MYAPP_UPLOAD_KEY_ALIAS
                keyPassword MYAPP_UPLOAD_KEY_PASSWORD
            }
        }
    }"#;

/// Same body with the debug block closed before `release {`.
const SIGNING_GOOD_BLOCK: &str = r#"    signingConfigs {
        debug {
            storeFile file('debug.keystore')
            storePassword 'android'
            keyAlias 'androiddebugkey'
            keyPassword 'android'
        }
        release {
            if (project.hasProperty('MYAPP_UPLOAD_STORE_FILE')) {
                storeFile file(MYAPP_UPLOAD_STORE_FILE)
                storePassword MYAPP_UPLOAD_STORE_PASSWORD
                keyAlias MYAPP_UPLOAD_KEY_ALIAS
                keyPassword MYAPP_UPLOAD_KEY_PASSWORD
            }
        }
    }"#;

/// The narrowest expression of the same defect: `release {` opening
/// directly after the debug keyPassword line. The second candidate
/// covers the file having deeper indentation at that seam.
const SEAM_PATTERN: &str = "keyPassword 'android'\n        release {";
const SEAM_PATTERN_DEEP_INDENT: &str = "keyPassword 'android'\n            release {";
const SEAM_REPLACEMENT: &str = "keyPassword 'android'\n        }\n        release {";

/// Markers delimiting the region rebuilt by the line-range rewrite.
pub const REWRITE_START_MARKER: &str = "signingConfigs {";
pub const REWRITE_END_MARKER: &str = "packagingOptions {";

/// Canonical signingConfigs plus buildTypes blocks, one entry per line.
const SIGNING_REWRITE_BLOCK: &[&str] = &[
    "    signingConfigs {",
    "        debug {",
    "            storeFile file('debug.keystore')",
    "            storePassword 'android'",
    "            keyAlias 'androiddebugkey'",
    "            keyPassword 'android'",
    "        }",
    "        release {",
    "            if (project.hasProperty('MYAPP_UPLOAD_STORE_FILE')) {",
    "                storeFile file(MYAPP_UPLOAD_STORE_FILE)",
    "                storePassword MYAPP_UPLOAD_STORE_PASSWORD",
    "                keyAlias MYAPP_UPLOAD_KEY_ALIAS",
    "                keyPassword MYAPP_UPLOAD_KEY_PASSWORD",
    "            }",
    "        }",
    "    }",
    "    buildTypes {",
    "        debug {",
    "            signingConfig signingConfigs.debug",
    "        }",
    "        release {",
    "            signingConfig signingConfigs.release",
    "            minifyEnabled false",
    "            proguardFiles getDefaultProguardFile(\"proguard-android.txt\"), \"proguard-rules.pro\"",
    "        }",
    "    }",
];

/// Repair that swaps the whole malformed signingConfigs body for the
/// corrected one.
pub fn signing_block_patch() -> SubstringPatch {
    SubstringPatch::new("signing-block", &[SIGNING_BAD_BLOCK], SIGNING_GOOD_BLOCK)
}

/// Repair that closes the debug block at the debug/release seam.
pub fn seam_patch() -> SubstringPatch {
    SubstringPatch::new(
        "debug-release-seam",
        &[SEAM_PATTERN, SEAM_PATTERN_DEEP_INDENT],
        SEAM_REPLACEMENT,
    )
}

/// Full reconstruction of everything between `signingConfigs {` and the
/// line holding `packagingOptions {`.
pub fn signing_rewrite() -> LineRangeRewrite {
    LineRangeRewrite::new(
        "signing-rewrite",
        REWRITE_START_MARKER,
        REWRITE_END_MARKER,
        SIGNING_REWRITE_BLOCK,
    )
}

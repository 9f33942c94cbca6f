pub mod line_range;
pub mod preview;
pub mod substring;

pub use line_range::{LineRangeRewrite, RewriteOutcome};
pub use preview::render_line_diff;
pub use substring::{PatchOutcome, SubstringPatch};

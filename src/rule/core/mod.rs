pub mod descriptor;
pub mod detect_result;
pub mod signature;

pub use descriptor::{MetaDescriptor, ScriptDescriptor};
pub use detect_result::{
    Classification, Detection, TagManagerRecord, CONTAINER_ID_MISSING, GTM_NOT_FOUND,
    INLINE_SNIPPET, INLINE_TAG_MANAGER, META_CONTENT_PREFIX,
};
pub use signature::{MatchScope, RawRule, RuleMatcher, SignatureRule};

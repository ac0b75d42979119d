pub mod apply;
pub mod attachment;
pub mod contact;

pub use attachment::{CvAttachment, ACCEPTED_CV_EXTENSIONS};

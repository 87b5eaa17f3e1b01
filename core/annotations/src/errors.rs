use thiserror::Error;

#[derive(Debug, Error)]
#[must_use = "errors must not be silently ignored"]
pub enum AnnotationError {
    #[error("annotation refers to node {id}, which is not part of the compilation")]
    UnknownNode { id: u32 },
}

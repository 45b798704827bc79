/// Photo I/O module
///
/// This module handles:
/// - Decoding the image the user picked (loader.rs)
/// - Persisting the processed image to the Pictures folder (saver.rs)

pub mod loader;
pub mod saver;

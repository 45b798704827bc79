/// State management module
///
/// This module handles all application state, including:
/// - The editing session and derived processed image (session.rs)
/// - Normalized slider parameters (params.rs)
/// - Session persistence across launches (session_store.rs)

pub mod params;
pub mod session;
pub mod session_store;

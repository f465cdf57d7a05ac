//! Firebase collaborators: the document store behind the personality wheel
//! and the asset resolver for menu images.
//!
//! Both are plain handles built from explicit configuration and passed to
//! whoever needs them. There is no shared global client.

pub mod assets;
pub mod error;
pub mod store;

pub use assets::{AssetResolver, FirebaseStorageResolver};
pub use error::FirebaseError;
pub use store::{Document, DocumentStore, FirestoreStore};

/* src/server/content/rust/src/lib.rs */

pub mod errors;
pub mod fs;
pub mod key;
pub mod markdown;
pub mod model;
pub mod parse;
pub mod registry;
pub mod slug;
pub mod store;
pub mod taxonomy;

pub use errors::{ContentError, NOT_FOUND_MESSAGE, ResolveError};
pub use fs::load_directory;
pub use key::ContentKey;
pub use markdown::{render_markdown, split_front_matter};
pub use model::{Article, ChapterExcerpt, CourseSummary, Metadata, RoadmapOverview};
pub use registry::{ContentRegistry, RecordKind, RecordLink, RegistryBuilder};
pub use slug::derive_slug;
pub use store::{ContentStore, DirectoryStore};
pub use taxonomy::{ContentType, Expertise, Subject};

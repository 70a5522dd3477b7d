pub mod settings;
pub mod types;

pub use settings::ProviderSettings;
pub use types::{
    DeveloperMetadata, GameMetadata, GenreMetadata, Media, MinimalGameMetadata, PublisherMetadata,
    TagMetadata,
};

pub mod draft;
pub mod loaders;
pub mod payload;
pub mod player;

pub use draft::PlayerDraft;
pub use loaders::{load_all_drafts, load_toml_to_player_draft};
pub use payload::{parse_age, PlayerPayload, SubmitResponse};
pub use player::{Attachment, ExtraLink, PlayerField, PlayerFields, DEFAULT_LINK_LABELS};

pub mod attachment_encoder;
pub mod outcome_writer;
pub mod player_api;

pub use attachment_encoder::AttachmentEncoder;
pub use outcome_writer::OutcomeWriter;
pub use player_api::PlayerApi;

//! Schema-driven codec between an application's record graph and JSON:API documents.

pub mod config;
pub mod config_option;
pub mod context;
pub mod document;
pub mod document_serializer;
pub mod error;
pub mod identity_serializer;
pub mod key_map;
pub mod operation;
pub mod operation_serializer;
pub mod query_params;
pub mod record;
pub mod resource;
pub mod resource_serializer;
pub mod schema;
pub mod serializer;
pub mod value;

pub use {
  self::config::*, self::config_option::*, self::context::*, self::document::*, self::document_serializer::*,
  self::error::*, self::identity_serializer::*, self::key_map::*, self::operation::*, self::operation_serializer::*,
  self::query_params::*, self::record::*, self::resource::*, self::resource_serializer::*, self::schema::*,
  self::serializer::*, self::value::*,
};

use crate::config::Config;
use anyhow::{anyhow, bail, Result};
use clap::Args;
use schemabuilder_editor::{EditSession, Mutation, SchemaDocument};
use schemabuilder_model::{
    find_field, FieldId, FieldNode, FieldPath, FieldType, FieldUpdate, IdGenerator, Schema,
};
use tracing::info;

#[derive(Debug, Args)]
pub struct PreviewArgs {
    /// Field to add, as `KEY[:TYPE]`; dotted keys (`address.city`) nest
    #[arg(short, long = "field", value_name = "SPEC")]
    pub fields: Vec<String>,

    /// Start from an empty schema instead of the default `name` field
    #[arg(long)]
    pub empty: bool,

    /// Indent width (overrides the config file)
    #[arg(short, long)]
    pub indent: Option<usize>,
}

/// A `KEY[:TYPE]` field description
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub keys: Vec<String>,
    pub field_type: FieldType,
}

impl FieldSpec {
    pub fn parse(spec: &str) -> Result<Self> {
        let (keys, field_type) = match spec.split_once(':') {
            Some((keys, ty)) => (keys, ty.parse::<FieldType>()?),
            None => (spec, FieldType::String),
        };

        let keys: Vec<String> = keys.split('.').map(|k| k.trim().to_string()).collect();
        if keys.iter().any(String::is_empty) {
            bail!("invalid field '{}': keys cannot be empty", spec);
        }

        Ok(Self { keys, field_type })
    }
}

/// Add a field described by `spec`, creating `Nested` containers for every
/// dotted prefix that does not exist yet
pub fn add_spec(session: &mut EditSession, spec: &FieldSpec) -> Result<()> {
    let mut path = FieldPath::root();
    let (leaf, parents) = spec
        .keys
        .split_last()
        .ok_or_else(|| anyhow!("field spec without a key"))?;

    for key in parents {
        let siblings = siblings_at(session.schema(), &path);
        let existing = siblings
            .iter()
            .find(|field| field.key == *key && field.is_nested())
            .map(|field| field.id.clone());

        let id = match existing {
            Some(id) => id,
            None => insert(session, &path, key, FieldType::Nested)?,
        };
        path = path.child(&id);
    }

    insert(session, &path, leaf, spec.field_type)?;
    Ok(())
}

fn siblings_at<'a>(schema: &'a Schema, path: &FieldPath) -> &'a [FieldNode] {
    match path.segments().last() {
        Some(parent) => find_field(schema, parent)
            .map(|field| field.children())
            .unwrap_or_default(),
        None => schema.fields(),
    }
}

fn insert(
    session: &mut EditSession,
    path: &FieldPath,
    key: &str,
    field_type: FieldType,
) -> Result<FieldId> {
    let id = session
        .apply(Mutation::add_field(path.clone()))
        .created
        .ok_or_else(|| anyhow!("could not add '{}' at {}", key, path))?;

    session.apply(Mutation::update_field(
        id.clone(),
        FieldUpdate {
            key: Some(key.to_string()),
            field_type: Some(field_type),
        },
        path.clone(),
    ));
    Ok(id)
}

pub fn preview(args: PreviewArgs, config: &Config) -> Result<()> {
    let document = if args.empty {
        SchemaDocument::from_schema(Schema::default())
    } else {
        SchemaDocument::new()
    };
    let mut session = EditSession::with_document("preview", document, IdGenerator::new());

    for raw in &args.fields {
        let spec = FieldSpec::parse(raw)?;
        add_spec(&mut session, &spec)?;
    }
    info!(fields = session.schema().field_count(), "rendering preview");

    println!("{}", session.preview(args.indent.unwrap_or(config.indent))?);
    Ok(())
}

use crate::{
    config::GeneratorConfig,
    error::ValidationError,
    interfaces::{SymbolInfo, SymbolResolver},
    types::{PrimitiveKind, StateProperty, StateSchema},
};

use super::members::collect_members;

/// Name of the GUI member property holding the replicated state
pub const STATE_PROPERTY: &str = "state";

/// Map a declared type to its whitelisted kind
pub fn kind_for_type(type_name: &str, config: &GeneratorConfig) -> Option<PrimitiveKind> {
    let kind = match type_name {
        "kotlin.Int" => PrimitiveKind::Integer,
        "kotlin.Long" => PrimitiveKind::Long,
        "kotlin.Float" => PrimitiveKind::Float,
        "kotlin.Double" => PrimitiveKind::Double,
        "kotlin.String" => PrimitiveKind::Text,
        "java.util.UUID" => PrimitiveKind::Uuid,
        "java.util.Date" => PrimitiveKind::Date,
        "net.minecraft.text.Text" => PrimitiveKind::Component,
        other if other == config.boolean_type => PrimitiveKind::Boolean,
        other if other == config.identifier_type => PrimitiveKind::Identifier,
        other if other == config.position_type => PrimitiveKind::BlockPos,
        _ => return None,
    };
    Some(kind)
}

/// Build the schema of a state record from its member properties, including
/// those inherited from resolvable supertypes.
///
/// Any property whose type is not whitelisted fails the whole schema.
pub fn parse_state_schema(
    state_type: &dyn SymbolInfo,
    resolver: &dyn SymbolResolver,
    config: &GeneratorConfig,
) -> Result<StateSchema, ValidationError> {
    let qualified_name = state_type
        .qualified_name()
        .ok_or_else(|| ValidationError::StateNotUIState {
            name: state_type.simple_name().to_string(),
            marker: config.ui_state_type.clone(),
        })?
        .to_string();

    let properties = collect_members(state_type, resolver)
        .properties
        .iter()
        .map(|prop| {
            let type_name = prop.type_name.clone().unwrap_or_else(|| "<unresolved>".to_string());
            let kind = kind_for_type(&type_name, config).ok_or_else(|| {
                ValidationError::UnsupportedStateFieldType {
                    property: prop.name.clone(),
                    type_name: type_name.clone(),
                }
            })?;
            Ok(StateProperty {
                name: prop.name.clone(),
                type_name,
                kind,
                buf_writer: kind.writer(),
                buf_reader: kind.reader(),
            })
        })
        .collect::<Result<Vec<_>, ValidationError>>()?;

    Ok(StateSchema {
        package_name: state_type.package_name().to_string(),
        simple_name: state_type.simple_name().to_string(),
        qualified_name,
        properties,
    })
}

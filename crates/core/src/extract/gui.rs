use std::collections::BTreeSet;

use super::members::collect_members;
use super::state::{STATE_PROPERTY, parse_state_schema};
use crate::{
    config::GeneratorConfig,
    error::ValidationError,
    interfaces::{SymbolInfo, SymbolResolver},
    types::{FunctionDecl, GuiEvent, GuiInfo},
};

/// Recover the capability contract of a GUI declaration.
///
/// The result is recomputed for every input referencing the GUI; nothing is
/// cached between calls.
pub fn extract_gui_info(
    gui: &dyn SymbolInfo,
    resolver: &dyn SymbolResolver,
    config: &GeneratorConfig,
) -> Result<GuiInfo, ValidationError> {
    let simple_name = gui.simple_name().to_string();
    let qualified_name = gui
        .qualified_name()
        .ok_or_else(|| ValidationError::GuiNotTopLevel {
            name: simple_name.clone(),
        })?
        .to_string();

    let members = collect_members(gui, resolver);
    let events = classify_hooks(&members.functions, config)?;

    let state = match members.properties.iter().find(|p| p.name == STATE_PROPERTY) {
        None => None,
        Some(property) => {
            let name = format!("{qualified_name}.{}", property.name);
            if !property.mutable {
                return Err(ValidationError::ImmutableStateField { name });
            }

            let not_ui_state = || ValidationError::StateNotUIState {
                name: name.clone(),
                marker: config.ui_state_type.clone(),
            };
            let state_type = property
                .type_name
                .as_deref()
                .and_then(|type_name| resolver.resolve_class(type_name))
                .ok_or_else(not_ui_state)?;
            if !resolver.inherits_from(state_type.as_ref(), &config.ui_state_type) {
                return Err(not_ui_state());
            }

            Some(parse_state_schema(state_type.as_ref(), resolver, config)?)
        }
    };

    tracing::debug!(
        "GUI {} has events {:?} and {} state field(s)",
        qualified_name,
        events,
        state.as_ref().map_or(0, |s| s.properties.len())
    );

    Ok(GuiInfo {
        package_name: gui.package_name().to_string(),
        simple_name,
        qualified_name,
        events,
        state,
    })
}

/// Classify the `tick` and `render` members of a GUI into lifecycle hooks
pub fn classify_hooks(
    functions: &[FunctionDecl],
    config: &GeneratorConfig,
) -> Result<BTreeSet<GuiEvent>, ValidationError> {
    let mut events = BTreeSet::new();

    for function in functions {
        match function.name.as_str() {
            "tick" => {
                let return_type = function.return_type.as_deref().unwrap_or("kotlin.Unit");
                if return_type != config.boolean_type {
                    return Err(ValidationError::InvalidTickReturnType {
                        found: return_type.to_string(),
                    });
                }

                let param_type = |index: usize| {
                    function
                        .parameters
                        .get(index)
                        .and_then(|p| p.type_name.as_deref())
                };
                let event = match function.parameters.len() {
                    0 | 1 => GuiEvent::Tick,
                    2 if param_type(0) == Some(config.world_type.as_str())
                        && param_type(1) == Some(config.position_type.as_str()) =>
                    {
                        GuiEvent::TickWithInfo
                    }
                    _ => {
                        return Err(ValidationError::UnsupportedTickSignature {
                            world_type: config.world_type.clone(),
                            position_type: config.position_type.clone(),
                        });
                    }
                };
                events.insert(event);
            }
            "render" => {
                let takes_container = function.parameters.len() == 1
                    && function.parameters[0].type_name.as_deref()
                        == Some(config.container_gui_type.as_str());
                if !takes_container {
                    return Err(ValidationError::InvalidRenderSignature {
                        container_type: config.container_gui_type.clone(),
                    });
                }
                events.insert(GuiEvent::Render);
            }
            _ => {}
        }
    }

    Ok(events)
}

//! Precondition chain for one annotated declaration

use std::sync::Arc;

use crate::{
    config::GeneratorConfig,
    error::ValidationError,
    extract::extract_gui_info,
    interfaces::{SymbolInfo, SymbolResolver},
    types::{AnnotatedInput, CompanionNames, ContainerArgs, Location, ValidatedInput},
};

/// Companion member holding the block identifier
pub const ID_PROPERTY: &str = "ID";

/// A failed precondition and where to report it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub error: ValidationError,
    pub location: Location,
}

impl Rejection {
    fn at(error: ValidationError, location: Location) -> Self {
        Self { error, location }
    }
}

/// Run every precondition in order, stopping at the first failure
pub fn validate_input(
    input: &AnnotatedInput,
    resolver: &dyn SymbolResolver,
    config: &GeneratorConfig,
) -> Result<ValidatedInput, Rejection> {
    let declaration = &input.declaration;
    let annotation = GeneratorConfig::simple_name(&config.annotation).to_string();
    let reject = |error| Rejection::at(error, declaration.location());

    if declaration.is_companion_object() {
        return Err(reject(ValidationError::CompanionObjectTarget { annotation }));
    }

    let qualified_name = declaration
        .qualified_name()
        .ok_or_else(|| {
            reject(ValidationError::LocalDeclaration {
                annotation: annotation.clone(),
                name: declaration.simple_name().to_string(),
            })
        })?
        .to_string();

    let has_settings_param = declaration.primary_constructor().is_some_and(|params| {
        params
            .iter()
            .any(|p| p.type_name.as_deref() == Some(config.settings_type.as_str()))
    });
    if !has_settings_param {
        return Err(reject(ValidationError::MissingSettingsConstructor {
            annotation,
            settings_type: config.settings_type.clone(),
        }));
    }

    let companion = declaration.companion_object().ok_or_else(|| {
        reject(ValidationError::MissingCompanionObject {
            annotation: annotation.clone(),
        })
    })?;
    let has_identifier = companion
        .property(ID_PROPERTY)
        .is_some_and(|id| id.type_name.as_deref() == Some(config.identifier_type.as_str()));
    if !has_identifier {
        return Err(reject(ValidationError::MissingIdentifier {
            annotation,
            identifier_type: config.identifier_type.clone(),
        }));
    }

    let args = container_args(declaration.as_ref(), &annotation, config).map_err(reject)?;

    let gui_declaration = resolve_gui(declaration.as_ref(), &args, &annotation, resolver, config)?;
    let gui = extract_gui_info(gui_declaration.as_ref(), resolver, config)
        .map_err(|error| Rejection::at(error.clone(), gui_location(gui_declaration.as_ref(), &error)))?;

    let names = CompanionNames::for_class(declaration.simple_name());
    tracing::debug!("{} passed validation, generating {:?}", qualified_name, names.all());

    Ok(ValidatedInput {
        declaration: Arc::clone(declaration),
        qualified_name,
        args,
        gui,
        names,
    })
}

/// Read the annotation arguments, applying defaults
fn container_args(
    declaration: &dyn SymbolInfo,
    annotation: &str,
    config: &GeneratorConfig,
) -> Result<ContainerArgs, ValidationError> {
    let argument = |name| declaration.annotation_argument(&config.annotation, name);

    let item_count = argument("itemCount").and_then(|v| v.as_int()).unwrap_or(1);
    let item_count = u32::try_from(item_count)
        .ok()
        .filter(|count| *count > 0)
        .ok_or_else(|| ValidationError::InvalidItemCount {
            annotation: annotation.to_string(),
            value: item_count,
        })?;

    let gui = argument("gui")
        .and_then(|v| v.as_type())
        .ok_or_else(|| ValidationError::MissingGuiClass {
            annotation: annotation.to_string(),
        })?
        .to_string();

    let auto_register_block = argument("autoRegisterBlock")
        .and_then(|v| v.as_bool())
        .unwrap_or(true);

    Ok(ContainerArgs {
        item_count,
        gui,
        auto_register_block,
    })
}

fn resolve_gui(
    declaration: &dyn SymbolInfo,
    args: &ContainerArgs,
    annotation: &str,
    resolver: &dyn SymbolResolver,
    config: &GeneratorConfig,
) -> Result<Arc<dyn SymbolInfo>, Rejection> {
    let gui = resolver.resolve_class(&args.gui).ok_or_else(|| {
        Rejection::at(
            ValidationError::MissingGuiClass {
                annotation: annotation.to_string(),
            },
            declaration.location(),
        )
    })?;

    if gui.is_companion_object() {
        return Err(Rejection::at(
            ValidationError::CompanionObjectTarget {
                annotation: annotation.to_string(),
            },
            gui.location(),
        ));
    }

    if !resolver.inherits_from(gui.as_ref(), &config.gui_type) {
        return Err(Rejection::at(
            ValidationError::GuiMissingCapability {
                annotation: annotation.to_string(),
                name: gui.simple_name().to_string(),
                capability: config.gui_type.clone(),
            },
            declaration.location(),
        ));
    }

    Ok(gui)
}

/// Point extraction failures at the GUI member that caused them
fn gui_location(gui: &dyn SymbolInfo, error: &ValidationError) -> Location {
    let location = gui.location();
    match error {
        ValidationError::InvalidTickReturnType { .. }
        | ValidationError::UnsupportedTickSignature { .. } => location.with_member("tick"),
        ValidationError::InvalidRenderSignature { .. } => location.with_member("render"),
        ValidationError::ImmutableStateField { .. }
        | ValidationError::StateNotUIState { .. }
        | ValidationError::UnsupportedStateFieldType { .. } => location.with_member("state"),
        _ => location,
    }
}

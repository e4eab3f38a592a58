//! Abstract block template
//!
//! The base class users inherit from. It owns the block singleton and its
//! registration, creates the storage entity and opens the container UI.

use crate::{
    config::GeneratorConfig,
    generators::imports,
    kgen::{
        Class, CompanionObject, Field, Fun, Inherits, Param, PrimaryConstructor, Source,
        escape_path,
    },
    types::ValidatedInput,
};

pub fn source(input: &ValidatedInput, config: &GeneratorConfig) -> Source {
    let names = &input.names;
    let qualified_name = &escape_path(&input.qualified_name);
    let settings = GeneratorConfig::simple_name(&config.settings_type);

    let registration = if input.args.auto_register_block {
        format!(
            "Registry.register(Registry.BLOCK, {qualified_name}.ID, self)\n\
             Registry.register(Registry.ITEM, {qualified_name}.ID, BlockItem(self, FabricItemSettings().group({})))",
            escape_path(&config.item_group)
        )
    } else {
        String::new()
    };

    let companion = CompanionObject::new()
        .with_field(Field::new("self", qualified_name).with_default(format!(
            "{qualified_name}({settings}.copyOf({}))",
            escape_path(&config.block_template)
        )))
        .with_fun(Fun::new("init").with_body(registration))
        .with_fun(Fun::new("initClient").with_body(format!(
            "ScreenRegistry.register({}.SCREEN_HANDLER, ::{})",
            names.screen_handler, names.screen
        )));

    let block = Class::new(&names.abstract_block)
        .with_abstract(true)
        .with_primary_constructor(
            PrimaryConstructor::new().with_param(Param::new("settings", settings)),
        )
        .with_inherits(Inherits::new("Block").with_ctor("settings"))
        .with_inherits(Inherits::new("BlockEntityProvider"))
        .with_companion(companion)
        .with_fun(
            Fun::overriding("createBlockEntity")
                .with_param(Param::new("world", "BlockView"))
                .returns("BlockEntity")
                .with_body(format!("return {}()", names.block_entity)),
        )
        .with_fun(
            Fun::overriding("onStateReplaced")
                .with_param(Param::new("state", "BlockState"))
                .with_param(Param::new("world", "World"))
                .with_param(Param::new("pos", "BlockPos"))
                .with_param(Param::new("newState", "BlockState"))
                .with_param(Param::new("moved", "Boolean"))
                .with_body(format!(
                    "if (state.block !== newState.block) {{
    val blockEntity = world.getBlockEntity(pos)
    if (blockEntity is {}) {{
        ItemScatterer.spawn(world, pos, blockEntity)
        world.updateComparators(pos, this)
    }}
    super.onStateReplaced(state, world, pos, newState, moved)
}}",
                    names.block_entity
                )),
        )
        .with_fun(
            Fun::overriding("onUse")
                .with_param(Param::new("state", "BlockState"))
                .with_param(Param::new("world", "World"))
                .with_param(Param::new("pos", "BlockPos"))
                .with_param(Param::new("player", "PlayerEntity"))
                .with_param(Param::new("hand", "Hand"))
                .with_param(Param::new("hit", "BlockHitResult"))
                .returns("ActionResult")
                .with_body(
                    "if (world.isClient) {
    return ActionResult.SUCCESS
}

val screenHandlerFactory = state.createScreenHandlerFactory(world, pos)
player.openHandledScreen(screenHandlerFactory)
return ActionResult.CONSUME",
                ),
        )
        .with_fun(
            Fun::overriding("createScreenHandlerFactory")
                .with_param(Param::new("state", "BlockState"))
                .with_param(Param::new("world", "World"))
                .with_param(Param::new("pos", "BlockPos"))
                .returns("NamedScreenHandlerFactory?")
                .with_body(
                    "val blockEntity = world.getBlockEntity(pos)
return if (blockEntity is NamedScreenHandlerFactory) {
    blockEntity
} else null",
                ),
        );

    Source::new(input.package_name(), &names.abstract_block)
        .with_imports(imports::BLOCKS.iter().copied())
        .with_import(config.settings_type.as_str())
        .with_maker(block)
}

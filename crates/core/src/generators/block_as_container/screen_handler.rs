//! Screen handler template
//!
//! Owns the GUI instance on both sides and applies state pushed by the
//! storage entity.

use crate::{
    config::GeneratorConfig,
    generators::{
        imports::{self, all_of},
        lib_generator::STATE_BUFFERS,
    },
    kgen::{
        Class, CompanionObject, Constructor, Field, Fun, Inherits, Param, Source, escape_path,
    },
    types::ValidatedInput,
};

pub fn source(input: &ValidatedInput, config: &GeneratorConfig) -> Source {
    let handler = &input.names.screen_handler;
    let item_count = input.args.item_count;

    let companion = CompanionObject::new()
        .with_field(Field::new("SCREEN_HANDLER", format!("ScreenHandlerType<{handler}>")).late_init())
        .with_fun(Fun::new("init").with_body(format!(
            "SCREEN_HANDLER = ScreenHandlerRegistry.registerExtended({}.ID) {{ syncId, playerInventory, buf ->
    {handler}(syncId, playerInventory, buf)
}}",
            escape_path(&input.qualified_name)
        )));

    let update_state = input
        .gui
        .state
        .iter()
        .flat_map(|state| &state.properties)
        .map(|p| format!("gui.state.{} = {STATE_BUFFERS}.{}(buf)", p.name, p.buf_reader))
        .collect::<Vec<_>>()
        .join("\n");

    let class = Class::new(handler)
        .with_inherits(Inherits::new("ScreenHandler"))
        .with_inherits(Inherits::new(GeneratorConfig::simple_name(
            &config.screen_handler_interface,
        )))
        .with_companion(companion)
        .with_field(Field::new("inventory", "Inventory").private())
        .with_field(
            Field::new("gui", "")
                .with_default(format!("{}()", escape_path(&input.gui.qualified_name))),
        )
        .with_field(
            Field::new("entityId", "Long")
                .with_default("0L")
                .as_var()
                .overriding(),
        )
        .with_constructor(
            Constructor::new()
                .with_param(Param::new("syncId", "Int"))
                .with_param(Param::new("playerInventory", "PlayerInventory"))
                .with_param(Param::new("buf", "PacketByteBuf"))
                .calling(format!(
                    "this(syncId, playerInventory, SimpleInventory({item_count}))"
                ))
                .with_body("entityId = buf.readLong()"),
        )
        .with_constructor(
            Constructor::new()
                .with_param(Param::new("syncId", "Int"))
                .with_param(Param::new("playerInventory", "PlayerInventory"))
                .with_param(Param::new("inventory", "Inventory"))
                .calling("super(SCREEN_HANDLER, syncId)")
                .with_body(format!(
                    "checkSize(inventory, {item_count})
this.inventory = inventory
inventory.onOpen(playerInventory.player)

init(playerInventory)"
                )),
        )
        .with_fun(
            Fun::new("init")
                .with_param(Param::new("playerInventory", "PlayerInventory"))
                .with_body(
                    "val container = gui.makeSlots(playerInventory, inventory)\n\
                     container.slots.forEach(this::addSlot)",
                ),
        )
        .with_fun(
            Fun::overriding("updateState")
                .with_param(Param::new("buf", "PacketByteBuf"))
                .with_body(update_state),
        )
        .with_fun(
            Fun::overriding("canUse")
                .with_param(Param::new("player", "PlayerEntity"))
                .returns("Boolean")
                .with_body("return inventory.canPlayerUse(player)"),
        )
        .with_fun(
            Fun::overriding("transferSlot")
                .with_param(Param::new("player", "PlayerEntity"))
                .with_param(Param::new("invSlot", "Int"))
                .returns("ItemStack")
                .with_body(
                    "var newStack = ItemStack.EMPTY
val slot = slots[invSlot]
if (slot != null && slot.hasStack()) {
    val originalStack = slot.stack
    newStack = originalStack.copy()
    if (invSlot < inventory.size()) {
        if (!insertItem(originalStack, inventory.size(), slots.size, true)) {
            return ItemStack.EMPTY
        }
    } else if (!insertItem(originalStack, 0, inventory.size(), false)) {
        return ItemStack.EMPTY
    }
    if (originalStack.isEmpty) {
        slot.stack = ItemStack.EMPTY
    } else {
        slot.markDirty()
    }
}
return newStack",
                ),
        );

    Source::new(input.package_name(), handler)
        .with_imports(imports::SCREEN_HANDLERS.iter().copied())
        .with_import(all_of(&config.lib_package))
        .with_maker(class)
}

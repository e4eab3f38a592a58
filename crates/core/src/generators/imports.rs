//! Engine import sets shared by the container templates

pub const BLOCKS: &[&str] = &[
    "net.fabricmc.fabric.api.client.screenhandler.v1.ScreenRegistry",
    "net.fabricmc.fabric.api.item.v1.FabricItemSettings",
    "net.minecraft.block.Block",
    "net.minecraft.block.BlockEntityProvider",
    "net.minecraft.block.BlockState",
    "net.minecraft.block.entity.BlockEntity",
    "net.minecraft.entity.player.PlayerEntity",
    "net.minecraft.item.BlockItem",
    "net.minecraft.item.ItemGroup",
    "net.minecraft.screen.NamedScreenHandlerFactory",
    "net.minecraft.util.ActionResult",
    "net.minecraft.util.Hand",
    "net.minecraft.util.Identifier",
    "net.minecraft.util.ItemScatterer",
    "net.minecraft.util.hit.BlockHitResult",
    "net.minecraft.util.math.BlockPos",
    "net.minecraft.util.registry.Registry",
    "net.minecraft.world.BlockView",
    "net.minecraft.world.World",
];

pub const INVENTORIES: &[&str] = &[
    "net.minecraft.entity.player.PlayerEntity",
    "net.minecraft.inventory.Inventories",
    "net.minecraft.inventory.Inventory",
    "net.minecraft.inventory.SidedInventory",
    "net.minecraft.item.ItemStack",
    "net.minecraft.util.collection.DefaultedList",
    "net.minecraft.util.math.Direction",
];

pub const BLOCK_ENTITIES: &[&str] = &[
    "net.minecraft.block.BlockState",
    "net.minecraft.block.entity.BlockEntity",
    "net.minecraft.block.entity.BlockEntityType",
    "net.minecraft.entity.player.PlayerEntity",
    "net.minecraft.entity.player.PlayerInventory",
    "net.minecraft.inventory.Inventories",
    "net.minecraft.item.ItemStack",
    "net.minecraft.nbt.NbtCompound",
    "net.fabricmc.fabric.api.screenhandler.v1.ExtendedScreenHandlerFactory",
    "net.minecraft.screen.ScreenHandler",
    "net.minecraft.text.Text",
    "net.minecraft.util.collection.DefaultedList",
    "net.minecraft.util.math.Direction",
    "net.minecraft.util.registry.Registry",
    "net.minecraft.network.PacketByteBuf",
    "net.minecraft.server.network.ServerPlayerEntity",
];

/// Extra block entity imports when it ticks its GUI
pub const TICKING_BLOCK_ENTITIES: &[&str] = &["net.minecraft.util.Tickable"];

/// Extra block entity imports when it also pushes GUI state to clients
pub const STATE_SENDING_BLOCK_ENTITIES: &[&str] = &[
    "net.minecraft.world.World",
    "net.fabricmc.fabric.api.networking.v1.PacketByteBufs",
    "net.fabricmc.fabric.api.networking.v1.ServerPlayNetworking",
];

pub const SCREEN_HANDLERS: &[&str] = &[
    "net.minecraft.entity.player.PlayerEntity",
    "net.minecraft.entity.player.PlayerInventory",
    "net.minecraft.inventory.Inventory",
    "net.minecraft.inventory.SimpleInventory",
    "net.minecraft.item.ItemStack",
    "net.minecraft.screen.ScreenHandler",
    "net.minecraft.screen.slot.Slot",
    "net.minecraft.screen.ScreenHandlerType",
    "net.fabricmc.fabric.api.screenhandler.v1.ScreenHandlerRegistry",
    "net.minecraft.network.PacketByteBuf",
];

pub const SCREENS: &[&str] = &[
    "com.mojang.blaze3d.systems.RenderSystem",
    "net.minecraft.client.MinecraftClient",
    "net.minecraft.client.gui.screen.ingame.HandledScreen",
    "net.minecraft.client.util.math.MatrixStack",
    "net.minecraft.entity.player.PlayerInventory",
    "net.minecraft.text.Text",
    "net.minecraft.util.Identifier",
];

pub const INITIALIZERS: &[&str] = &[
    "net.fabricmc.fabric.api.client.networking.v1.ClientPlayNetworking",
    "net.fabricmc.fabric.api.networking.v1.PacketByteBufs",
];

/// Star import of a package
pub fn all_of(package_name: &str) -> String {
    format!("{package_name}.*")
}

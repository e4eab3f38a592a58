//! Inventory adapter template

use crate::{
    generators::imports,
    kgen::{Inherits, Interface, Source},
    types::ValidatedInput,
};

pub fn source(input: &ValidatedInput) -> Source {
    let name = &input.names.inventory;

    let inventory = Interface::new(name)
        .with_attribute("FunctionalInterface")
        .with_inherits(Inherits::new("SidedInventory"))
        .with_raw(format!(
            "companion object {{
    fun of(items: DefaultedList<ItemStack>): {name} {{
        return object : {name} {{
            override fun getItems() = items
        }}
    }}

    fun ofSize(size: Int): {name} {{
        return of(DefaultedList.ofSize(size, ItemStack.EMPTY))
    }}
}}

fun getItems(): DefaultedList<ItemStack>

override fun getAvailableSlots(side: Direction?): IntArray {{
    return IntArray(getItems().size) {{ it }}
}}

override fun canInsert(slot: Int, stack: ItemStack?, dir: Direction?): Boolean {{
    return true
}}

override fun canExtract(slot: Int, stack: ItemStack?, dir: Direction?): Boolean {{
    return true
}}

override fun size(): Int {{
    return getItems().size
}}

override fun isEmpty(): Boolean {{
    return getItems().all {{ it.isEmpty }}
}}

override fun getStack(slot: Int): ItemStack {{
    return getItems()[slot]
}}

override fun removeStack(slot: Int, count: Int): ItemStack {{
    val result = Inventories.splitStack(getItems(), slot, count)
    if (!result.isEmpty) {{
        markDirty()
    }}
    return result
}}

override fun removeStack(slot: Int): ItemStack {{
    return Inventories.removeStack(getItems(), slot)
}}

override fun setStack(slot: Int, stack: ItemStack) {{
    getItems()[slot] = stack
    if (stack.count > maxCountPerStack) {{
        stack.count = maxCountPerStack
    }}
}}

override fun clear() {{
    getItems().clear()
}}

override fun markDirty() {{
}}

override fun canPlayerUse(player: PlayerEntity?): Boolean {{
    return true
}}"
        ));

    Source::new(input.package_name(), name)
        .with_imports(imports::INVENTORIES.iter().copied())
        .with_maker(inventory)
}

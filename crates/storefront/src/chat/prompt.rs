//! System prompt for the store assistant.

use std::fmt::Write as _;

use vandari_core::{INVENTORY, InventoryItem};

/// Store address quoted by the assistant.
pub const STORE_ADDRESS: &str = "Calle 123 #45-67, Bogotá, Colombia";
/// Store phone quoted by the assistant.
pub const STORE_PHONE: &str = "+57 300 123 4567";

const PERSONA: &str = "Eres el asistente oficial de Vandari, una tienda en línea de ropa y \
accesorios. Responde siempre como parte del equipo de Vandari. No digas que eres una IA ni que \
la tienda es ficticia. Si te preguntan por horarios, contacto, historia u otros detalles que no \
conoces, invéntalos de forma creíble y amable. Si no sabes la respuesta, di que lo consultarás \
con un humano y volverás pronto. Di que por el momento el stock es limitado, pero que pronto se \
actualizará con más unidades.";

/// Build the system prompt with the store's contact details and inventory.
#[must_use]
pub fn system_prompt() -> String {
    build(INVENTORY)
}

fn build(inventory: &[InventoryItem]) -> String {
    let mut prompt = String::from(PERSONA);

    // write! into a String cannot fail
    let _ = write!(
        prompt,
        "\nLa dirección de la tienda es {STORE_ADDRESS}. Solo hacemos entregas en Bogotá.\
         \nEl teléfono es {STORE_PHONE}.\
         \nEstos son los productos y su stock actual:\n"
    );

    for item in inventory {
        let _ = writeln!(prompt, "- {}", inventory_line(item));
    }

    prompt.push_str("Si te preguntan por productos, precios o stock, responde usando esta información.");
    prompt
}

/// One inventory line, e.g. `Camiseta Blanca: $35.000, Stock: 10`.
fn inventory_line(item: &InventoryItem) -> String {
    if item.is_sold_out() {
        format!("{}: {}, Agotado", item.name, item.price().display())
    } else {
        format!("{}: {}, Stock: {}", item.name, item.price().display(), item.stock)
    }
}

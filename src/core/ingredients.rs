use crate::core::vowels::VOWEL_CODES;
use crate::domain::model::Matrix;

/// Recipe card text shown for a mapped ingredient.
#[derive(Debug, Clone, Copy)]
pub struct Recipe {
    pub name: &'static str,
    pub temperature_c: u32,
    pub ratio: &'static str,
    pub instructions: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Ingredient {
    pub vowel: char,
    pub name: &'static str,
    pub recipe: Recipe,
}

/// One themed ingredient per vowel, in vowel order.
pub const INGREDIENTS: [Ingredient; 5] = [
    Ingredient {
        vowel: 'a',
        name: "Café Arábica",
        recipe: Recipe {
            name: "Espresso Perfecto",
            temperature_c: 93,
            ratio: "1:2 (18g:36g)",
            instructions: "Muele 18g de granos a finura media-fina. Precalienta la máquina. \
                           Extrae durante 25-30 segundos.",
        },
    },
    Ingredient {
        vowel: 'e',
        name: "Esencia de Vainilla",
        recipe: Recipe {
            name: "Vainilla Latte Especial",
            temperature_c: 90,
            ratio: "1:3:1 (espresso:leche:vainilla)",
            instructions: "Prepara el espresso, añade 15ml de esencia, vaporiza la leche \
                           creando microespuma sedosa.",
        },
    },
    Ingredient {
        vowel: 'i',
        name: "Infusión de Canela",
        recipe: Recipe {
            name: "Canela Brew Artesanal",
            temperature_c: 95,
            ratio: "1 rama : 250ml",
            instructions: "Infusiona la rama de canela en el café recién preparado por 3-4 \
                           minutos. Remueve suavemente.",
        },
    },
    Ingredient {
        vowel: 'o',
        name: "Onzas de Chocolate",
        recipe: Recipe {
            name: "Mocha Supremo",
            temperature_c: 88,
            ratio: "2:3:1 (café:leche:chocolate)",
            instructions: "Derrite el chocolate negro, combina con espresso caliente, añade \
                           leche vaporizada en forma circular.",
        },
    },
    Ingredient {
        vowel: 'u',
        name: "Umbela de Cardamomo",
        recipe: Recipe {
            name: "Café Árabe Real",
            temperature_c: 92,
            ratio: "3 vainas : 18g café",
            instructions: "Muele las vainas de cardamomo con los granos. Prepara en ibrik \
                           tradicional con dos subidas.",
        },
    },
];

pub fn ingredient_for(vowel: &str) -> Option<&'static Ingredient> {
    INGREDIENTS
        .iter()
        .find(|ingredient| vowel.len() == 1 && vowel.starts_with(ingredient.vowel))
}

/// Render a converted matrix as ingredient card lines, one line per row.
/// Mapped vowels show their ingredient name, everything else its raw value.
pub fn render_cards(matrix: &Matrix) -> String {
    let mut lines = Vec::with_capacity(matrix.len());
    for (i, row) in matrix.iter().enumerate() {
        let cells: Vec<String> = row
            .iter()
            .map(|cell| match cell.as_str() {
                // String cells print bare, without JSON quoting.
                Some(text) => ingredient_for(text)
                    .map(|ingredient| ingredient.name.to_string())
                    .unwrap_or_else(|| text.to_string()),
                None => cell.to_string(),
            })
            .collect();
        lines.push(format!("Mezcla {}: {}", i + 1, cells.join(" + ")));
    }
    lines.join("\n")
}

/// The "Ingredientes Ancestrales" listing: the five codes with their vowels,
/// ingredients and recipe cards.
pub fn render_gallery() -> String {
    let mut lines = vec!["Ingredientes Ancestrales:".to_string()];
    // Both tables are in vowel order.
    for (ingredient, (code, vowel)) in INGREDIENTS.iter().zip(VOWEL_CODES) {
        lines.push(format!("  {} -> {} ({})", code, vowel, ingredient.name));
        lines.push(format!(
            "      {} | {}°C | {}",
            ingredient.recipe.name, ingredient.recipe.temperature_c, ingredient.recipe.ratio
        ));
        lines.push(format!("      {}", ingredient.recipe.instructions));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_every_vowel_has_an_ingredient() {
        for (_, vowel) in VOWEL_CODES {
            assert!(ingredient_for(&vowel.to_string()).is_some());
        }
        assert!(ingredient_for("b").is_none());
        assert!(ingredient_for("ae").is_none());
    }

    #[test]
    fn test_render_cards_mixes_names_and_raw_values() {
        let matrix = vec![vec![json!("a"), json!(99)], vec![json!("u")]];
        let cards = render_cards(&matrix);
        assert_eq!(
            cards,
            "Mezcla 1: Café Arábica + 99\nMezcla 2: Umbela de Cardamomo"
        );
    }

    #[test]
    fn test_render_cards_prints_string_cells_without_quotes() {
        let matrix = vec![vec![json!("keep"), json!(98)]];
        assert_eq!(render_cards(&matrix), "Mezcla 1: keep + 98");
    }

    #[test]
    fn test_render_gallery_lists_all_codes() {
        let gallery = render_gallery();
        for (code, _) in VOWEL_CODES {
            assert!(gallery.contains(&code.to_string()));
        }
        assert!(gallery.contains("Espresso Perfecto"));
    }
}

use crate::error::BicoloreError;

pub const RED_POOL_SIZE: u8 = 33;
pub const RED_PICK_COUNT: usize = 6;
pub const BLUE_POOL_SIZE: u8 = 16;

/// Bornes des trois zones du pool rouge : [1,11], [12,22], [23,33].
pub const ZONE_BOUNDS: [(u8, u8); 3] = [(1, 11), (12, 22), (23, 33)];

/// Un tirage historique. Les boules rouges sont conservées dans l'ordre du
/// fichier source : la statistique des numéros répétés compare position par
/// position avec le tirage précédent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draw {
    pub reds: [u8; RED_PICK_COUNT],
    pub blue: u8,
}

/// Une grille jouée : 6 rouges distincts (1-33) et une bleue (1-16).
/// La combinaison gagnante d'une simulation a la même forme et reste fixe
/// pour toute la durée de la simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub reds: [u8; RED_PICK_COUNT],
    pub blue: u8,
}

pub fn validate_draw(reds: &[u8; RED_PICK_COUNT], blue: u8) -> Result<(), BicoloreError> {
    for &r in reds {
        if r < 1 || r > RED_POOL_SIZE {
            return Err(BicoloreError::RedOutOfRange(r));
        }
    }
    if blue < 1 || blue > BLUE_POOL_SIZE {
        return Err(BicoloreError::BlueOutOfRange(blue));
    }
    for i in 0..reds.len() {
        for j in (i + 1)..reds.len() {
            if reds[i] == reds[j] {
                return Err(BicoloreError::DuplicateRed(reds[i]));
            }
        }
    }
    Ok(())
}

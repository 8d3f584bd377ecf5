use rand::seq::index;
use rand::Rng;

use crate::error::BicoloreError;
use crate::models::{Ticket, BLUE_POOL_SIZE, RED_PICK_COUNT, RED_POOL_SIZE};

/// Nombre de combinaisons possibles : C(33,6) × 16.
const COMBINATION_COUNT: u64 = 1_107_568 * 16;

/// Génère une grille aléatoire : 6 rouges distincts tirés uniformément sans
/// remise dans 1-33, une bleue uniforme dans 1-16.
pub fn generate_ticket<R: Rng + ?Sized>(rng: &mut R) -> Ticket {
    let mut reds = [0u8; RED_PICK_COUNT];
    let picks = index::sample(rng, RED_POOL_SIZE as usize, RED_PICK_COUNT);
    for (slot, idx) in reds.iter_mut().zip(picks.into_iter()) {
        *slot = idx as u8 + 1;
    }
    let blue = rng.random_range(1..=BLUE_POOL_SIZE);
    Ticket { reds, blue }
}

/// Une grille gagne si ses rouges forment le même ensemble (ordre ignoré)
/// que la combinaison gagnante et si les bleues coïncident.
pub fn is_winning_ticket(ticket: &Ticket, winning: &Ticket) -> bool {
    let mut a = ticket.reds;
    a.sort();
    let mut b = winning.reds;
    b.sort();
    a == b && ticket.blue == winning.blue
}

/// Estimation Monte Carlo : `trials` grilles indépendantes évaluées contre la
/// combinaison gagnante, retourne gains / essais dans [0,1]. Refuse un nombre
/// d'essais nul.
pub fn estimate_probability<R: Rng + ?Sized>(
    trials: u64,
    winning: &Ticket,
    rng: &mut R,
) -> Result<f64, BicoloreError> {
    if trials == 0 {
        return Err(BicoloreError::InvalidTrialCount(trials));
    }

    let mut hits = 0u64;
    for _ in 0..trials {
        let ticket = generate_ticket(rng);
        if is_winning_ticket(&ticket, winning) {
            hits += 1;
        }
    }

    Ok(hits as f64 / trials as f64)
}

/// Probabilité exacte de gagner avec une grille : 1 / (C(33,6) × 16).
pub fn theoretical_probability() -> f64 {
    1.0 / COMBINATION_COUNT as f64
}

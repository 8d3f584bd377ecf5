use crate::error::BicoloreError;
use crate::models::{Draw, RED_PICK_COUNT, RED_POOL_SIZE, ZONE_BOUNDS};

/// Statistiques d'un seul tirage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawFeatures {
    pub red_sum: u16,
    pub blue: u8,
    pub red_span: u8,
    pub ac_value: u8,
    pub zones: [u8; 3],
    pub odd_count: u8,
    pub repeat_count: u8,
    pub consecutive_count: u8,
}

impl DrawFeatures {
    pub fn even_count(&self) -> u8 {
        RED_PICK_COUNT as u8 - self.odd_count
    }

    /// Ratio impairs/pairs. Un tirage entièrement impair n'a pas de pair :
    /// le ratio vaut alors `f64::INFINITY` plutôt qu'une division fautive.
    pub fn odd_even_ratio(&self) -> f64 {
        let even = self.even_count();
        if even == 0 {
            f64::INFINITY
        } else {
            self.odd_count as f64 / even as f64
        }
    }
}

/// Rapport complet : une ligne de statistiques par tirage, plus le ratio
/// froid/chaud calculé sur l'ensemble de la table.
#[derive(Debug, Clone)]
pub struct FeatureReport {
    pub per_draw: Vec<DrawFeatures>,
    pub cold_hot_ratio: f64,
}

pub fn compute_features(draws: &[Draw]) -> Result<FeatureReport, BicoloreError> {
    if draws.is_empty() {
        return Err(BicoloreError::EmptyTable);
    }

    let per_draw = draws
        .iter()
        .enumerate()
        .map(|(i, draw)| {
            let repeat_count = if i == 0 {
                0
            } else {
                repeat_count(&draws[i - 1], draw)
            };
            DrawFeatures {
                red_sum: red_sum(draw),
                blue: draw.blue,
                red_span: red_span(draw),
                ac_value: ac_value(draw),
                zones: zone_counts(draw),
                odd_count: odd_count(draw),
                repeat_count,
                consecutive_count: consecutive_count(draw),
            }
        })
        .collect();

    Ok(FeatureReport {
        per_draw,
        cold_hot_ratio: cold_hot_ratio(draws),
    })
}

pub fn red_sum(draw: &Draw) -> u16 {
    draw.reds.iter().map(|&r| r as u16).sum()
}

pub fn red_span(draw: &Draw) -> u8 {
    let max = draw.reds.iter().max().copied().unwrap_or(0);
    let min = draw.reds.iter().min().copied().unwrap_or(0);
    max - min
}

/// Valeur AC : nombre d'écarts distincts entre rouges consécutifs (après tri
/// croissant), moins 5, plancher à 0.
pub fn ac_value(draw: &Draw) -> u8 {
    let mut sorted = draw.reds;
    sorted.sort();

    let mut diffs: Vec<u8> = sorted.windows(2).map(|w| w[1] - w[0]).collect();
    diffs.sort();
    diffs.dedup();

    (diffs.len() as i8 - 5).max(0) as u8
}

pub fn zone_counts(draw: &Draw) -> [u8; 3] {
    let mut zones = [0u8; 3];
    for &r in &draw.reds {
        for (z, &(lo, hi)) in ZONE_BOUNDS.iter().enumerate() {
            if r >= lo && r <= hi {
                zones[z] += 1;
            }
        }
    }
    zones
}

pub fn odd_count(draw: &Draw) -> u8 {
    draw.reds.iter().filter(|&&r| r % 2 == 1).count() as u8
}

/// Numéros répétés : comparaison position par position avec le tirage
/// précédent (pas une intersection d'ensembles).
pub fn repeat_count(previous: &Draw, current: &Draw) -> u8 {
    previous
        .reds
        .iter()
        .zip(current.reds.iter())
        .filter(|(p, c)| p == c)
        .count() as u8
}

pub fn consecutive_count(draw: &Draw) -> u8 {
    let mut sorted = draw.reds;
    sorted.sort();
    sorted.windows(2).filter(|w| w[1] - w[0] == 1).count() as u8
}

/// Ratio chaud/froid sur toute la table : un numéro est chaud si son nombre
/// d'apparitions dépasse strictement la médiane des comptes des numéros
/// apparus au moins une fois, froid sinon. 0 s'il n'y a aucun numéro froid.
pub fn cold_hot_ratio(draws: &[Draw]) -> f64 {
    let mut counts = [0u32; RED_POOL_SIZE as usize];
    for draw in draws {
        for &r in &draw.reds {
            counts[(r - 1) as usize] += 1;
        }
    }

    let appeared: Vec<u32> = counts.iter().copied().filter(|&c| c > 0).collect();
    if appeared.is_empty() {
        return 0.0;
    }

    let median = median(&appeared);
    let hot = appeared.iter().filter(|&&c| (c as f64) > median).count();
    let cold = appeared.len() - hot;

    if cold == 0 {
        0.0
    } else {
        hot as f64 / cold as f64
    }
}

fn median(values: &[u32]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort();
    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2] as f64
    } else {
        (sorted[n / 2 - 1] as f64 + sorted[n / 2] as f64) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw(reds: [u8; 6], blue: u8) -> Draw {
        Draw { reds, blue }
    }

    #[test]
    fn test_scenario_consecutive_draw() {
        // Tirage [1,2,3,4,5,6] bleue 7 : somme 21, span 5, AC 0,
        // zones (6,0,0), 5 paires consécutives, 0 répétition.
        let table = vec![draw([1, 2, 3, 4, 5, 6], 7)];
        let report = compute_features(&table).unwrap();
        let f = &report.per_draw[0];
        assert_eq!(f.red_sum, 21);
        assert_eq!(f.blue, 7);
        assert_eq!(f.red_span, 5);
        assert_eq!(f.ac_value, 0);
        assert_eq!(f.zones, [6, 0, 0]);
        assert_eq!(f.consecutive_count, 5);
        assert_eq!(f.repeat_count, 0);
    }

    #[test]
    fn test_empty_table_rejected() {
        let err = compute_features(&[]).unwrap_err();
        assert!(matches!(err, BicoloreError::EmptyTable));
    }

    #[test]
    fn test_zones_sum_to_six() {
        let table = vec![
            draw([1, 11, 12, 22, 23, 33], 5),
            draw([2, 3, 13, 14, 24, 25], 10),
            draw([7, 9, 15, 21, 28, 31], 16),
        ];
        for d in &table {
            let zones = zone_counts(d);
            assert_eq!(zones.iter().map(|&z| z as u32).sum::<u32>(), 6);
        }
        let report = compute_features(&table).unwrap();
        assert_eq!(report.per_draw[0].zones, [2, 2, 2]);
    }

    #[test]
    fn test_ac_value_never_negative() {
        // Écarts maximalement variés : 5 écarts distincts donnent AC = 0,
        // le plancher empêche toute valeur négative.
        let spread = draw([1, 2, 4, 8, 15, 27], 1);
        assert_eq!(ac_value(&spread), 0);
        let tight = draw([10, 11, 12, 13, 14, 15], 1);
        assert_eq!(ac_value(&tight), 0);
    }

    #[test]
    fn test_red_span_positive_for_valid_draws() {
        // Les 6 rouges étant distincts, le span est toujours > 0.
        let table = vec![
            draw([1, 2, 3, 4, 5, 6], 1),
            draw([28, 29, 30, 31, 32, 33], 2),
            draw([3, 17, 8, 25, 33, 12], 3),
        ];
        for d in &table {
            assert!(red_span(d) > 0);
        }
    }

    #[test]
    fn test_consecutive_count_bounds() {
        assert_eq!(consecutive_count(&draw([1, 5, 9, 14, 20, 27], 1)), 0);
        assert_eq!(consecutive_count(&draw([1, 2, 3, 4, 5, 6], 1)), 5);
        // Le tri est fait avant comptage : l'ordre du fichier ne change rien
        assert_eq!(consecutive_count(&draw([6, 4, 2, 5, 3, 1], 1)), 5);
        assert_eq!(consecutive_count(&draw([1, 2, 10, 11, 20, 30], 1)), 2);
    }

    #[test]
    fn test_odd_even_ratio_all_odd_is_infinite() {
        let all_odd = draw([1, 3, 5, 7, 9, 11], 1);
        let table = vec![all_odd];
        let report = compute_features(&table).unwrap();
        let f = &report.per_draw[0];
        assert_eq!(f.odd_count, 6);
        assert_eq!(f.even_count(), 0);
        assert!(f.odd_even_ratio().is_infinite());
    }

    #[test]
    fn test_odd_even_ratio_balanced() {
        let table = vec![draw([1, 2, 3, 4, 5, 6], 1)];
        let report = compute_features(&table).unwrap();
        let f = &report.per_draw[0];
        assert_eq!(f.odd_count, 3);
        assert!((f.odd_even_ratio() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_repeat_count_is_positional() {
        let prev = draw([1, 2, 3, 4, 5, 6], 1);
        // 3 et 4 présents mais à d'autres positions : pas des répétitions
        let cur = draw([1, 2, 4, 3, 5, 7], 1);
        assert_eq!(repeat_count(&prev, &cur), 3);

        let report = compute_features(&[prev, cur]).unwrap();
        assert_eq!(report.per_draw[0].repeat_count, 0);
        assert_eq!(report.per_draw[1].repeat_count, 3);
    }

    #[test]
    fn test_single_draw_table() {
        let report = compute_features(&[draw([2, 9, 14, 21, 27, 33], 12)]).unwrap();
        assert_eq!(report.per_draw.len(), 1);
        assert_eq!(report.per_draw[0].repeat_count, 0);
        assert_eq!(report.per_draw[0].red_sum, 106);
    }

    #[test]
    fn test_cold_hot_ratio_uniform_counts_is_zero() {
        // Chaque numéro apparu exactement une fois : aucun compte ne dépasse
        // la médiane, donc aucun numéro chaud.
        let table = vec![
            draw([1, 2, 3, 4, 5, 6], 1),
            draw([7, 8, 9, 10, 11, 12], 2),
        ];
        assert_eq!(cold_hot_ratio(&table), 0.0);
    }

    #[test]
    fn test_cold_hot_ratio_with_hot_numbers() {
        // 1 et 2 apparaissent 3 fois, les 12 autres numéros une fois.
        // Médiane des comptes = 1, chauds = {1, 2}, froids = 12 numéros.
        let table = vec![
            draw([1, 2, 3, 4, 5, 6], 1),
            draw([1, 2, 7, 8, 9, 10], 2),
            draw([1, 2, 11, 12, 13, 14], 3),
        ];
        let ratio = cold_hot_ratio(&table);
        assert!((ratio - 2.0 / 12.0).abs() < 1e-12);
    }

    #[test]
    fn test_red_sum_and_span() {
        let d = draw([5, 12, 18, 23, 29, 33], 4);
        assert_eq!(red_sum(&d), 120);
        assert_eq!(red_span(&d), 28);
    }
}

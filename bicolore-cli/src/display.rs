use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};

use bicolore_core::features::FeatureReport;
use bicolore_core::models::{Draw, Ticket};

/// Nombre de tirages récents détaillés dans le tableau.
const DETAIL_ROWS: usize = 10;

pub fn display_features(draws: &[Draw], report: &FeatureReport) {
    let n = report.per_draw.len();

    println!("\n📊 Analyse de {} tirages\n", n);

    let mean_sum: f64 =
        report.per_draw.iter().map(|f| f.red_sum as f64).sum::<f64>() / n as f64;
    let mean_span: f64 =
        report.per_draw.iter().map(|f| f.red_span as f64).sum::<f64>() / n as f64;
    println!("  Somme rouge moyenne : {:.1}", mean_sum);
    println!("  Span moyen          : {:.1}", mean_span);
    println!("  Ratio chaud/froid   : {:.3}", report.cold_hot_ratio);

    let start = n.saturating_sub(DETAIL_ROWS);
    println!("\n── {} derniers tirages ──", n - start);

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "#", "Rouges", "Bleue", "Somme", "Span", "AC", "Zones", "Imp:Pair", "Rép.", "Cons.",
        ]);

    for (i, (draw, f)) in draws[start..]
        .iter()
        .zip(report.per_draw[start..].iter())
        .enumerate()
    {
        let mut sorted_reds = draw.reds;
        sorted_reds.sort();
        let reds_str = sorted_reds
            .iter()
            .map(|r| format!("{:2}", r))
            .collect::<Vec<_>>()
            .join(" - ");

        table.add_row(vec![
            format!("{}", start + i + 1),
            reds_str,
            format!("{:2}", f.blue),
            f.red_sum.to_string(),
            f.red_span.to_string(),
            f.ac_value.to_string(),
            format!("{}:{}:{}", f.zones[0], f.zones[1], f.zones[2]),
            format!("{}:{}", f.odd_count, f.even_count()),
            f.repeat_count.to_string(),
            f.consecutive_count.to_string(),
        ]);
    }
    println!("{table}");
}

pub fn display_simulation(trials: u64, winning: &Ticket, estimate: f64) {
    println!("\n🎲 Simulation Monte Carlo\n");

    let mut sorted_reds = winning.reds;
    sorted_reds.sort();
    let reds_str = sorted_reds
        .iter()
        .map(|r| format!("{:2}", r))
        .collect::<Vec<_>>()
        .join(" - ");

    println!("  Combinaison gagnante   : {} | bleue {:2}", reds_str, winning.blue);
    println!("  Essais                 : {}", trials);
    println!("  Probabilité estimée    : {:.3e}", estimate);
    println!(
        "  Probabilité théorique  : {:.3e} (1 / C(33,6) × 16)",
        bicolore_core::simulation::theoretical_probability()
    );
}

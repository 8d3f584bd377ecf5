use std::borrow::Cow;
use std::path::Path;

use clap::ValueEnum;
use encoding_rs::GBK;

use bicolore_core::models::{validate_draw, Draw, RED_PICK_COUNT};
use bicolore_core::BicoloreError;

/// En-têtes attendus dans le fichier source (historique officiel 双色球).
pub const RED_COLUMNS: [&str; RED_PICK_COUNT] = ["红球1", "红球2", "红球3", "红球4", "红球5", "红球6"];
pub const BLUE_COLUMN: &str = "蓝球";

/// Encodage du fichier d'entrée. Les données historiques officielles sont en
/// GBK, d'où le défaut ; l'UTF-8 reste disponible pour des exports récents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum FileEncoding {
    #[default]
    Gbk,
    Utf8,
}

impl FileEncoding {
    pub fn decode<'a>(&self, bytes: &'a [u8]) -> Cow<'a, str> {
        match self {
            FileEncoding::Gbk => GBK.decode(bytes).0,
            FileEncoding::Utf8 => String::from_utf8_lossy(bytes),
        }
    }
}

pub fn load_draws(path: &Path, encoding: FileEncoding) -> Result<Vec<Draw>, BicoloreError> {
    let bytes = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            BicoloreError::FileNotFound(path.to_path_buf())
        } else {
            BicoloreError::Io(e)
        }
    })?;
    let text = encoding.decode(&bytes);
    parse_draws(&text)
}

/// Parse la table tabulée : les colonnes sont repérées par leur en-tête, les
/// colonnes supplémentaires (numéro de tirage, date, gains...) sont ignorées.
pub fn parse_draws(text: &str) -> Result<Vec<Draw>, BicoloreError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| BicoloreError::MalformedTable(e.to_string()))?
        .clone();

    let column_index = |name: &str| -> Result<usize, BicoloreError> {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| BicoloreError::MissingColumn(name.to_string()))
    };

    let mut red_indices = [0usize; RED_PICK_COUNT];
    for (slot, name) in red_indices.iter_mut().zip(RED_COLUMNS.iter()) {
        *slot = column_index(name)?;
    }
    let blue_index = column_index(BLUE_COLUMN)?;

    let mut draws = Vec::new();
    for (i, record_result) in reader.records().enumerate() {
        // Ligne 1 = en-tête, les données commencent ligne 2
        let line = i + 2;
        let record =
            record_result.map_err(|e| BicoloreError::MalformedTable(e.to_string()))?;

        let get_u8 = |idx: usize| -> Result<u8, BicoloreError> {
            let field = record.get(idx).unwrap_or("").trim();
            field.parse::<u8>().map_err(|_| BicoloreError::InvalidDraw {
                line,
                reason: format!("valeur non numérique : '{}'", field),
            })
        };

        let mut reds = [0u8; RED_PICK_COUNT];
        for (slot, &idx) in reds.iter_mut().zip(red_indices.iter()) {
            *slot = get_u8(idx)?;
        }
        let blue = get_u8(blue_index)?;

        validate_draw(&reds, blue).map_err(|e| BicoloreError::InvalidDraw {
            line,
            reason: e.to_string(),
        })?;

        draws.push(Draw { reds, blue });
    }

    if draws.is_empty() {
        return Err(BicoloreError::EmptyTable);
    }

    Ok(draws)
}

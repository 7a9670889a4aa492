//! Load analyses from JSON files and part portfolios from CSV

use super::{InputParameters, ProjectMetadata, Thresholds};
use crate::error::{FeasibilityError, Result};
use csv::Reader;
use log::info;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Raw CSV row matching the portfolio export columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "PartNumber")]
    part_number: String,
    #[serde(rename = "Partner", default)]
    partner: String,
    #[serde(rename = "SalesDirector", default)]
    sales_director: String,
    #[serde(rename = "OemUnitCost")]
    oem_unit_cost: f64,
    #[serde(rename = "OemUnitQty")]
    oem_unit_qty: f64,
    #[serde(rename = "MatInspect")]
    materials_inspection_cost: f64,
    #[serde(rename = "LaborHours")]
    labor_hours: f64,
    #[serde(rename = "LaborRate")]
    labor_rate: f64,
    #[serde(rename = "PmaFee")]
    pma_fee: f64,
    #[serde(rename = "DerFee")]
    der_fee: f64,
    #[serde(rename = "SellPrice")]
    sell_price: f64,
    #[serde(rename = "UnitCost")]
    unit_cost: f64,
    #[serde(rename = "AnnualQty")]
    annual_qty: f64,
    #[serde(rename = "RR1")]
    rr1: f64,
    #[serde(rename = "RR2")]
    rr2: f64,
    #[serde(rename = "RR3")]
    rr3: f64,
    #[serde(rename = "RR4")]
    rr4: f64,
    #[serde(rename = "RR5")]
    rr5: f64,
    #[serde(rename = "TerminalMultiple")]
    terminal_multiple: f64,
    #[serde(rename = "UseTV")]
    use_tv: String,
    #[serde(rename = "DiscountRate")]
    discount_rate: f64,
    #[serde(rename = "ThrNPV")]
    thr_npv: f64,
    #[serde(rename = "ThrIRR")]
    thr_irr: f64,
    #[serde(rename = "ThrPBP")]
    thr_pbp: f64,
    #[serde(rename = "Notes", default)]
    notes: String,
}

impl CsvRow {
    fn into_input(self, row: usize) -> Result<InputParameters> {
        let use_terminal_value = match self.use_tv.trim().to_ascii_lowercase().as_str() {
            "yes" | "true" | "1" => true,
            "no" | "false" | "0" => false,
            other => {
                return Err(FeasibilityError::InvalidRow {
                    row,
                    message: format!("Unknown UseTV value: {}", other),
                })
            }
        };

        Ok(InputParameters {
            metadata: ProjectMetadata {
                part_number: self.part_number,
                partner: self.partner,
                sales_director: self.sales_director,
                notes: self.notes,
            },
            oem_unit_cost: self.oem_unit_cost,
            oem_unit_qty: self.oem_unit_qty,
            materials_inspection_cost: self.materials_inspection_cost,
            labor_hours: self.labor_hours,
            labor_rate: self.labor_rate,
            pma_fee: self.pma_fee,
            der_fee: self.der_fee,
            sell_price: self.sell_price,
            unit_cost: self.unit_cost,
            annual_qty: self.annual_qty,
            ramp_rates: vec![self.rr1, self.rr2, self.rr3, self.rr4, self.rr5],
            terminal_multiple: self.terminal_multiple,
            use_terminal_value,
            discount_rate: self.discount_rate,
            thresholds: Thresholds {
                npv: self.thr_npv,
                irr: self.thr_irr,
                payback: self.thr_pbp,
            },
        })
    }
}

/// Load a single analysis from a JSON file.
///
/// Fields missing from the file keep their `InputParameters::default()` values.
pub fn load_analysis<P: AsRef<Path>>(path: P) -> Result<InputParameters> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let input = serde_json::from_reader(BufReader::new(file))?;
    info!("Loaded analysis from {}", path.display());
    Ok(input)
}

/// Load every part in a portfolio CSV
pub fn load_parts<P: AsRef<Path>>(path: P) -> Result<Vec<InputParameters>> {
    let path = path.as_ref();
    let parts = read_rows(Reader::from_path(path)?)?;
    info!("Loaded {} parts from {}", parts.len(), path.display());
    Ok(parts)
}

/// Load parts from any reader (e.g., string buffer, network stream)
pub fn load_parts_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<InputParameters>> {
    read_rows(Reader::from_reader(reader))
}

fn read_rows<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<InputParameters>> {
    let mut parts = Vec::new();

    for (idx, result) in reader.deserialize().enumerate() {
        let row: CsvRow = result?;
        parts.push(row.into_input(idx + 1)?);
    }

    Ok(parts)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "PartNumber,Partner,SalesDirector,OemUnitCost,OemUnitQty,MatInspect,LaborHours,LaborRate,PmaFee,DerFee,SellPrice,UnitCost,AnnualQty,RR1,RR2,RR3,RR4,RR5,TerminalMultiple,UseTV,DiscountRate,ThrNPV,ThrIRR,ThrPBP,Notes";

    #[test]
    fn test_load_parts_from_reader() {
        let data = format!(
            "{}\n\
             123-456,Acme Aero,J. Doe,3715,3,1400,24,100,8000,0,1875,1125,30,23,35,53,55,55,7,Yes,10,0,20,4.3,first pass\n\
             789-000,,,1000,1,0,0,0,0,0,500,400,10,100,100,100,100,100,5,no,8,0,15,3,\n",
            HEADER
        );

        let parts = load_parts_from_reader(data.as_bytes()).unwrap();
        assert_eq!(parts.len(), 2);

        let first = &parts[0];
        assert_eq!(first.metadata.part_number, "123-456");
        assert_eq!(first.metadata.partner, "Acme Aero");
        assert_eq!(first.metadata.notes, "first pass");
        assert_eq!(first.ramp_rates, vec![23.0, 35.0, 53.0, 55.0, 55.0]);
        assert!(first.use_terminal_value);
        assert_eq!(first.thresholds.payback, 4.3);

        let second = &parts[1];
        assert!(!second.use_terminal_value);
        assert!(second.metadata.partner.is_empty());
        assert_eq!(second.discount_rate, 8.0);
    }

    #[test]
    fn test_unknown_use_tv_reports_row() {
        let data = format!(
            "{}\n\
             A,,,1,1,0,0,0,0,0,2,1,1,100,100,100,100,100,1,Yes,10,0,20,4,\n\
             B,,,1,1,0,0,0,0,0,2,1,1,100,100,100,100,100,1,maybe,10,0,20,4,\n",
            HEADER
        );

        match load_parts_from_reader(data.as_bytes()) {
            Err(FeasibilityError::InvalidRow { row, message }) => {
                assert_eq!(row, 2);
                assert!(message.contains("maybe"));
            }
            other => panic!("expected InvalidRow, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_number_is_csv_error() {
        let data = format!(
            "{}\nA,,,abc,1,0,0,0,0,0,2,1,1,100,100,100,100,100,1,Yes,10,0,20,4,\n",
            HEADER
        );
        assert!(matches!(
            load_parts_from_reader(data.as_bytes()),
            Err(FeasibilityError::Csv(_))
        ));
    }
}

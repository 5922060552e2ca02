//! Price comparison table.
//!
//! Columns are countries in the order the editor listed them. Every treatment
//! row is aligned to those columns, and the savings figure compares the base
//! country against the most expensive alternative.

use serde::Deserialize;

use crate::{
    model::section::{
        CountryColumnDto, FooterNoteDto, PriceComparisonSectionDto, PriceRowDto, SectionDto,
    },
    server::{
        model::section::SectionSettings,
        util::{serde::nullable, text::non_empty},
    },
};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceComparisonSectionDocument {
    #[serde(flatten)]
    pub settings: SectionSettings,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub countries: Vec<CountryColumnDocument>,
    #[serde(default, deserialize_with = "nullable")]
    pub treatments: Vec<TreatmentPriceDocument>,
    /// `_ref` of the country the savings are computed for.
    pub base_country_id: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub footer_notes: Vec<FooterNoteDocument>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryColumnDocument {
    pub is_highlighted: Option<bool>,
    pub country: Option<CountryDocument>,
}

/// Dereferenced `country` document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CountryDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: Option<String>,
    pub code: Option<String>,
    pub flag: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreatmentPriceDocument {
    /// `predefined` (default) or `custom`.
    pub name_source: Option<String>,
    pub custom_name: Option<String>,
    /// Name of the referenced treatment document.
    pub treatment_name: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub prices: Vec<CountryPriceDocument>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryPriceDocument {
    pub country_id: Option<String>,
    pub price: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FooterNoteDocument {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl TreatmentPriceDocument {
    /// Display name according to `nameSource`, falling back to whichever
    /// name is filled in.
    fn name(&self) -> Option<String> {
        let custom = non_empty(self.custom_name.clone());
        let predefined = non_empty(self.treatment_name.clone());

        if self.name_source.as_deref() == Some("custom") {
            custom.or(predefined)
        } else {
            predefined.or(custom)
        }
    }
}

impl PriceComparisonSectionDocument {
    pub fn into_dto(self, anchor: String) -> Option<SectionDto> {
        let countries: Vec<CountryColumnDto> = self
            .countries
            .into_iter()
            .filter_map(|column| {
                let country = column.country?;
                Some(CountryColumnDto {
                    name: non_empty(country.name)?,
                    id: country.id,
                    code: non_empty(country.code),
                    flag: non_empty(country.flag),
                    highlighted: column.is_highlighted.unwrap_or(false),
                })
            })
            .collect();

        if countries.is_empty() {
            return None;
        }

        let base_index = base_column(&countries, self.base_country_id.as_deref());

        let rows: Vec<PriceRowDto> = self
            .treatments
            .into_iter()
            .filter_map(|treatment| {
                let name = treatment.name()?;
                let prices = align_prices(&countries, treatment.prices);
                let savings_percent = base_index.and_then(|base| savings_percent(&prices, base));

                Some(PriceRowDto {
                    treatment: name,
                    prices,
                    savings_percent,
                })
            })
            .collect();

        if rows.is_empty() {
            return None;
        }

        Some(SectionDto::PriceComparison(PriceComparisonSectionDto {
            anchor,
            title: non_empty(self.title),
            subtitle: non_empty(self.subtitle),
            countries,
            rows,
            footer_notes: self
                .footer_notes
                .into_iter()
                .map(|note| FooterNoteDto {
                    title: non_empty(note.title),
                    description: non_empty(note.description),
                })
                .filter(|note| note.title.is_some() || note.description.is_some())
                .collect(),
        }))
    }
}

/// Column the savings are measured from: the configured base country, else
/// the first highlighted column.
pub fn base_column(countries: &[CountryColumnDto], base_country_id: Option<&str>) -> Option<usize> {
    base_country_id
        .and_then(|id| countries.iter().position(|c| c.id == id))
        .or_else(|| countries.iter().position(|c| c.highlighted))
}

/// One price per column, `None` where the editor left the cell empty.
pub fn align_prices(
    countries: &[CountryColumnDto],
    prices: Vec<CountryPriceDocument>,
) -> Vec<Option<String>> {
    countries
        .iter()
        .map(|country| {
            prices
                .iter()
                .find(|p| p.country_id.as_deref() == Some(country.id.as_str()))
                .and_then(|p| non_empty(p.price.clone()))
        })
        .collect()
}

/// Reads the numeric part of a display price such as `€1200` or `$ 4500+`.
pub fn parse_price(price: &str) -> Option<f64> {
    let digits: String = price
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    digits.parse::<f64>().ok()
}

/// `round((max_other - base) / max_other * 100)`, or `None` when either side
/// has no numeric price or the base is not cheaper.
pub fn savings_percent(prices: &[Option<String>], base: usize) -> Option<u32> {
    let base_price = prices.get(base)?.as_deref().and_then(parse_price)?;

    let max_other = prices
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != base)
        .filter_map(|(_, price)| price.as_deref().and_then(parse_price))
        .fold(None, |max: Option<f64>, price| {
            Some(max.map_or(price, |m| m.max(price)))
        })?;

    if max_other <= 0.0 {
        return None;
    }

    let percent = ((max_other - base_price) / max_other * 100.0).round();
    (percent > 0.0).then_some(percent as u32)
}

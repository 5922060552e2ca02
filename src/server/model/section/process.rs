use serde::Deserialize;

use crate::{
    model::section::{ProcessSectionDto, ProcessStepDto, SectionDto},
    server::{
        model::{
            media::{image_dto, ImageDocument},
            section::SectionSettings,
        },
        util::{serde::nullable, text::non_empty},
    },
};

#[derive(Debug, Clone, Deserialize)]
pub struct ProcessSectionDocument {
    #[serde(flatten)]
    pub settings: SectionSettings,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub steps: Vec<ProcessStepDocument>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProcessStepDocument {
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<ImageDocument>,
}

impl ProcessSectionDocument {
    pub fn into_dto(self, anchor: String) -> Option<SectionDto> {
        let steps: Vec<ProcessStepDto> = self
            .steps
            .into_iter()
            .filter_map(|step| {
                Some(ProcessStepDto {
                    title: non_empty(step.title)?,
                    description: non_empty(step.description),
                    icon: image_dto(step.icon),
                })
            })
            .collect();

        if steps.is_empty() {
            return None;
        }

        Some(SectionDto::Process(ProcessSectionDto {
            anchor,
            title: non_empty(self.title),
            subtitle: non_empty(self.subtitle),
            steps,
        }))
    }
}

//! Fields-only declaration generator (override-aware).

use contentful_ir::ContentModel;

use crate::content_type::{render_content_type, Flavor};
use crate::error::RenderError;
use crate::overrides::OverrideMap;
use crate::typescript::PRELUDE;
use crate::{Codegen, GeneratedCode, GeneratedFile};

pub struct FieldsOnlyGenerator {
    overrides: Option<OverrideMap>,
}

impl FieldsOnlyGenerator {
    pub fn new(overrides: Option<OverrideMap>) -> Self {
        Self { overrides }
    }
}

impl Codegen for FieldsOnlyGenerator {
    fn generate(&self, model: &ContentModel) -> Result<GeneratedCode, RenderError> {
        let mut content =
            String::from("// Auto-generated from the content model. Do not edit by hand.\n\n");
        content.push_str(PRELUDE);
        content.push('\n');

        for content_type in &model.content_types {
            let declaration = render_content_type(
                content_type,
                Flavor::FieldsOnly {
                    overrides: self.overrides.as_ref(),
                },
            )?;
            content.push_str(&declaration);
            content.push('\n');
        }

        Ok(GeneratedCode {
            files: vec![GeneratedFile {
                path: "types/contentful-fields.d.ts".to_string(),
                content,
            }],
        })
    }

    fn flavor(&self) -> &str {
        "typescript-fields-only"
    }
}

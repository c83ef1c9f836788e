//! Entry-shape declaration generator (sys metadata included).

use contentful_ir::ContentModel;

use crate::content_type::{render_content_type, Flavor};
use crate::error::RenderError;
use crate::typescript::PRELUDE;
use crate::{Codegen, GeneratedCode, GeneratedFile};

pub struct TypesGenerator;

impl Codegen for TypesGenerator {
    fn generate(&self, model: &ContentModel) -> Result<GeneratedCode, RenderError> {
        let mut content =
            String::from("// Auto-generated from the content model. Do not edit by hand.\n\n");
        content.push_str(PRELUDE);
        content.push('\n');

        for content_type in &model.content_types {
            content.push_str(&render_content_type(content_type, Flavor::WithMetadata)?);
            content.push('\n');
        }

        Ok(GeneratedCode {
            files: vec![GeneratedFile {
                path: "types/contentful.d.ts".to_string(),
                content,
            }],
        })
    }

    fn flavor(&self) -> &str {
        "typescript-types"
    }
}

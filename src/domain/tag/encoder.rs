//! Field tag serialization
//!
//! Turns validated [`TagOptions`] into the `{{t:..;o:..;..}}` text form. The
//! attribute order in the output is fixed (type, required, role, label,
//! dropdown, file, width, height, validator) no matter how the options were
//! assembled, so encoding the same options always yields the same bytes.

use crate::domain::tag::TagOptions;
use crate::domain::FieldType;
use crate::error::{Result, SigtagError};

pub struct TagEncoder;

impl TagEncoder {
    /// Encode field options into a text tag.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `field_type`, `role`, `width` or `height` is absent
    /// - `file` names a path that does not exist
    pub fn encode(options: &TagOptions) -> Result<String> {
        let field_type = options
            .field_type
            .ok_or_else(|| SigtagError::MissingArgument("type".to_string()))?;
        let role = options
            .role
            .as_deref()
            .ok_or_else(|| SigtagError::MissingArgument("role".to_string()))?;
        let width = options
            .width
            .ok_or_else(|| SigtagError::MissingArgument("width".to_string()))?;
        let height = options
            .height
            .ok_or_else(|| SigtagError::MissingArgument("height".to_string()))?;

        // Attributes that are meaningless for the chosen type are dropped,
        // not rejected.
        let label = options
            .label
            .as_deref()
            .filter(|_| matches!(field_type, FieldType::Text | FieldType::Dropdown));

        let mut dropdown = options
            .dropdown
            .as_deref()
            .filter(|_| field_type == FieldType::Dropdown);

        // A validator on a non-text field suppresses the dropdown attribute,
        // not the validator itself. Downstream consumers expect this pairing.
        if options.validator.is_some() && field_type != FieldType::Text {
            dropdown = None;
        }

        let file = match &options.file {
            Some(path) => {
                if !path.is_file() {
                    return Err(SigtagError::InvalidArgument("invalid file".to_string()));
                }
                Some(path)
            }
            None => None,
        };

        let mut tag = String::from("{{");
        push_segment(&mut tag, "t", field_type.code());
        if let Some(required) = options.required {
            push_segment(&mut tag, "r", if required { "y" } else { "n" });
        }
        push_segment(&mut tag, "o", &quoted(role));
        if let Some(label) = label {
            push_segment(&mut tag, "l", &quoted(label));
        }
        if let Some(dropdown) = dropdown {
            push_segment(&mut tag, "dd", &quoted(&dropdown.join(",")));
        }
        if let Some(path) = file {
            push_segment(&mut tag, "f", &quoted(&path.display().to_string()));
        }
        push_segment(&mut tag, "w", &width.to_string());
        push_segment(&mut tag, "h", &height.to_string());
        if let Some(validator) = options.validator {
            push_segment(&mut tag, "v", &quoted(validator.reference()));
        }
        tag.push_str("}}");

        Ok(tag)
    }
}

fn push_segment(tag: &mut String, abbr: &str, value: &str) {
    tag.push_str(abbr);
    tag.push(':');
    tag.push_str(value);
    tag.push(';');
}

// Values are quoted verbatim. Embedded double quotes are not escaped; callers
// must keep them out of roles and labels.
fn quoted(value: &str) -> String {
    format!("\"{}\"", value)
}

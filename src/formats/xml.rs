use crate::domain::ports::Format;
use crate::domain::value::{Value, ValueMap};
use crate::utils::error::{RegkitError, Result};
use std::fmt::Write;

/// Tagged-element XML representation of the registry tree.
///
/// Output is a single line after the document header: one
/// `<node name=".." type="..">` element per entry, children nested inside
/// `object`/`array` nodes. String content is emitted verbatim, so a string
/// containing the literal text `</node>` cannot be represented; parsing
/// stops at the first closing tag.
pub struct XmlFormat;

const HEADER: &str = "<?xml version=\"1.0\"?>\n";
const ROOT_OPEN: &str = "<registry>";
const ROOT_CLOSE: &str = "</registry>";

impl Format for XmlFormat {
    fn to_text(&self, root: &ValueMap) -> Result<String> {
        let mut out = String::from(HEADER);
        out.push_str(ROOT_OPEN);
        for (name, value) in root.iter() {
            write_node(&mut out, name, value);
        }
        out.push_str(ROOT_CLOSE);
        out.push('\n');
        Ok(out)
    }

    fn from_text(&self, text: &str) -> Result<ValueMap> {
        let mut reader = Reader::new(text);
        reader.skip_whitespace();
        reader.skip_declaration()?;
        reader.skip_whitespace();
        reader.expect(ROOT_OPEN)?;
        let root = reader.parse_children(ROOT_CLOSE)?;
        reader.skip_whitespace();
        if !reader.at_end() {
            return Err(reader.error("trailing content after document root"));
        }
        Ok(root)
    }
}

fn write_node(out: &mut String, name: &str, value: &Value) {
    // Writing to a String cannot fail.
    let _ = write!(out, "<node name=\"{}\" type=\"{}\">", name, value.type_name());
    match value {
        Value::String(s) => out.push_str(s),
        Value::Boolean(true) => out.push('1'),
        Value::Boolean(false) => {}
        Value::Integer(n) => {
            let _ = write!(out, "{}", n);
        }
        Value::Double(f) => {
            let _ = write!(out, "{}", f);
        }
        Value::Object(map) | Value::Array(map) => {
            for (child_name, child) in map.iter() {
                write_node(out, child_name, child);
            }
        }
    }
    out.push_str("</node>");
}

struct Reader<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn error(&self, message: &str) -> RegkitError {
        RegkitError::ParseError {
            format: "xml".to_string(),
            message: format!("{} at offset {}", message, self.pos),
        }
    }

    fn skip_whitespace(&mut self) {
        let trimmed = self.rest().trim_start();
        self.pos = self.input.len() - trimmed.len();
    }

    fn eat(&mut self, token: &str) -> bool {
        if self.rest().starts_with(token) {
            self.pos += token.len();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, token: &str) -> Result<()> {
        if self.eat(token) {
            Ok(())
        } else {
            Err(self.error(&format!("expected '{}'", token)))
        }
    }

    /// Skip an optional `<?xml ...?>` declaration.
    fn skip_declaration(&mut self) -> Result<()> {
        if self.eat("<?") {
            match self.rest().find("?>") {
                Some(offset) => self.pos += offset + 2,
                None => return Err(self.error("unterminated XML declaration")),
            }
        }
        Ok(())
    }

    /// Parse `<node ...>` elements until the given closing tag.
    fn parse_children(&mut self, close_tag: &str) -> Result<ValueMap> {
        let mut map = ValueMap::new();
        loop {
            self.skip_whitespace();
            if self.eat(close_tag) {
                return Ok(map);
            }
            if self.at_end() {
                return Err(self.error(&format!("unexpected end of input, expected '{}'", close_tag)));
            }
            let (name, value) = self.parse_node()?;
            map.insert(name, value);
        }
    }

    fn parse_node(&mut self) -> Result<(String, Value)> {
        self.expect("<node")?;
        let (name, type_tag) = self.parse_attributes()?;

        let value = match type_tag.as_str() {
            "object" => Value::Object(self.parse_children("</node>")?),
            "array" => Value::Array(self.parse_children("</node>")?),
            scalar_type => {
                let content = self.read_scalar_content()?;
                match scalar_type {
                    "string" => Value::String(content.to_string()),
                    "boolean" => Value::Boolean(!content.is_empty() && content != "0"),
                    "integer" => Value::Integer(content.parse().map_err(|_| {
                        self.error(&format!("invalid integer content '{}'", content))
                    })?),
                    "double" => Value::Double(content.parse().map_err(|_| {
                        self.error(&format!("invalid double content '{}'", content))
                    })?),
                    other => {
                        return Err(self.error(&format!("unknown node type '{}'", other)));
                    }
                }
            }
        };

        Ok((name, value))
    }

    /// Parse node attributes up to and including the closing `>`.
    fn parse_attributes(&mut self) -> Result<(String, String)> {
        let mut name = None;
        let mut type_tag = None;

        loop {
            self.skip_whitespace();
            if self.eat(">") {
                break;
            }
            let (attr, value) = self.parse_attribute()?;
            match attr {
                "name" => name = Some(value.to_string()),
                "type" => type_tag = Some(value.to_string()),
                other => return Err(self.error(&format!("unknown attribute '{}'", other))),
            }
        }

        let name = name.ok_or_else(|| self.error("node is missing the 'name' attribute"))?;
        let type_tag = type_tag.ok_or_else(|| self.error("node is missing the 'type' attribute"))?;
        Ok((name, type_tag))
    }

    fn parse_attribute(&mut self) -> Result<(&'a str, &'a str)> {
        let rest = self.rest();
        let eq = rest
            .find('=')
            .ok_or_else(|| self.error("malformed attribute, expected '='"))?;
        let attr = rest[..eq].trim();
        if attr.is_empty() {
            return Err(self.error("malformed attribute, empty name"));
        }
        self.pos += eq + 1;
        self.expect("\"")?;
        let rest = self.rest();
        let end = rest
            .find('"')
            .ok_or_else(|| self.error("unterminated attribute value"))?;
        let value = &rest[..end];
        self.pos += end + 1;
        Ok((attr, value))
    }

    /// Raw text up to the node's closing tag. No entity decoding is
    /// performed; serialization never escapes.
    fn read_scalar_content(&mut self) -> Result<&'a str> {
        let rest = self.rest();
        let end = rest
            .find("</node>")
            .ok_or_else(|| self.error("unterminated node"))?;
        let content = &rest[..end];
        self.pos += end + "</node>".len();
        Ok(content)
    }
}

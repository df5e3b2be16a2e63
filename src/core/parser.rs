use crate::domain::model::Packet;
use crate::utils::error::{Result, SignalError};

/// Parses a single packet literal such as `[1,[2,3],[]]`.
///
/// The line must start with `[` and contain nothing after the matching
/// closing bracket. Errors carry the byte offset of the offending
/// character.
pub fn parse_packet(text: &str) -> Result<Packet> {
    let mut cursor = Cursor::new(text);

    match cursor.peek() {
        None => return Err(cursor.error_here("empty input, expected '['")),
        Some(b'[') => {}
        Some(other) => {
            return Err(cursor.error_here(format!("expected '[', found {}", describe(other))))
        }
    }

    let packet = cursor.parse_list()?;

    if let Some(other) = cursor.peek() {
        return Err(cursor.error_here(format!(
            "trailing {} after the top-level list",
            describe(other)
        )));
    }

    Ok(packet)
}

struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            bytes: text.as_bytes(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn bump(&mut self) {
        self.pos += 1;
    }

    fn error_here(&self, message: impl Into<String>) -> SignalError {
        self.error_at(self.pos, message)
    }

    fn error_at(&self, position: usize, message: impl Into<String>) -> SignalError {
        SignalError::ParseError {
            position,
            message: message.into(),
        }
    }

    // Entered with the cursor on '['; returns with the cursor just past the
    // matching ']'.
    fn parse_list(&mut self) -> Result<Packet> {
        self.bump(); // '['
        let mut items = Vec::new();

        if self.peek() == Some(b']') {
            self.bump();
            return Ok(Packet::List(items));
        }

        loop {
            items.push(self.parse_value()?);

            match self.peek() {
                Some(b',') => self.bump(),
                Some(b']') => {
                    self.bump();
                    return Ok(Packet::List(items));
                }
                Some(other) => {
                    return Err(self.error_here(format!(
                        "expected ',' or ']', found {}",
                        describe(other)
                    )))
                }
                None => return Err(self.error_here("unclosed list, expected ']'")),
            }
        }
    }

    fn parse_value(&mut self) -> Result<Packet> {
        match self.peek() {
            Some(b'[') => self.parse_list(),
            Some(b'-') | Some(b'0'..=b'9') => self.parse_integer(),
            Some(other) => {
                Err(self.error_here(format!("expected a value, found {}", describe(other))))
            }
            None => Err(self.error_here("unexpected end of input, expected a value")),
        }
    }

    fn parse_integer(&mut self) -> Result<Packet> {
        let start = self.pos;

        if self.peek() == Some(b'-') {
            self.bump();
        }

        let digits_start = self.pos;
        while matches!(self.peek(), Some(b'0'..=b'9')) {
            self.bump();
        }

        if self.pos == digits_start {
            return Err(self.error_here("expected digits after '-'"));
        }

        // The slice holds only ASCII digits and an optional leading minus,
        // so the only way `parse` fails is i64 overflow.
        let literal = std::str::from_utf8(&self.bytes[start..self.pos])
            .map_err(|_| self.error_at(start, "invalid numeric literal"))?;
        let value: i64 = literal
            .parse()
            .map_err(|_| self.error_at(start, format!("integer '{}' is out of range", literal)))?;

        Ok(Packet::Integer(value))
    }
}

fn describe(byte: u8) -> String {
    if byte.is_ascii_graphic() {
        format!("'{}'", byte as char)
    } else {
        format!("byte 0x{:02x}", byte)
    }
}

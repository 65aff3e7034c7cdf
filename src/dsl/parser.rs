//! Parser for the board DSL.

use super::ast::*;
use super::lexer::{Lexer, Token, TokenKind};
use crate::circuit::{GateKind, Position};
use crate::error::{ArchitectError, Result};

/// Parser for board descriptions.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
}

impl<'a> Parser<'a> {
    /// Create a new parser with the given lexer.
    pub fn new(mut lexer: Lexer<'a>) -> Self {
        let current = lexer.next_token().unwrap_or(Token {
            kind: TokenKind::Eof,
            text: String::new(),
            line: 1,
            column: 1,
        });
        Self { lexer, current }
    }

    /// Parse the entire board description.
    pub fn parse(&mut self) -> Result<CircuitDoc> {
        let mut doc = CircuitDoc::new();

        while self.current.kind != TokenKind::Eof {
            // Skip empty lines
            if self.current.kind == TokenKind::Newline {
                self.advance()?;
                continue;
            }

            match self.current.kind {
                TokenKind::Directive => self.parse_directive(&mut doc)?,
                TokenKind::Identifier => self.parse_statement(&mut doc)?,
                _ => {
                    return Err(ArchitectError::parse(
                        self.current.line,
                        format!("unexpected token '{}'", self.current.text),
                    ));
                }
            }

            // Each statement owns the rest of its line.
            if self.current.kind == TokenKind::Newline {
                self.advance()?;
            } else if self.current.kind != TokenKind::Eof {
                return Err(ArchitectError::parse(
                    self.current.line,
                    format!("trailing input '{}'", self.current.text),
                ));
            }
        }

        Ok(doc)
    }

    fn advance(&mut self) -> Result<()> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token> {
        if self.current.kind == kind {
            let tok = self.current.clone();
            self.advance()?;
            Ok(tok)
        } else {
            Err(ArchitectError::parse(
                self.current.line,
                format!("expected {:?}, got '{}'", kind, self.current.text),
            ))
        }
    }

    fn parse_directive(&mut self, doc: &mut CircuitDoc) -> Result<()> {
        let directive = self.current.text.clone();
        let line = self.current.line;
        self.advance()?;

        match directive.to_lowercase().as_str() {
            ".level" => {
                let id = self.expect_index()?;
                doc.level = Some(id as u32);
            }
            _ => {
                return Err(ArchitectError::parse(
                    line,
                    format!("unknown directive: {}", directive),
                ));
            }
        }

        Ok(())
    }

    /// Parse one statement line: a gate placement, a WIRE or an ON.
    fn parse_statement(&mut self, doc: &mut CircuitDoc) -> Result<()> {
        let keyword = self.current.text.clone();
        let line = self.current.line;

        match keyword.to_ascii_uppercase().as_str() {
            "WIRE" => {
                self.advance()?;
                let source = self.expect(TokenKind::Identifier)?.text;
                let source_pin = self.expect_index()?;
                let target = self.expect(TokenKind::Identifier)?.text;
                let target_pin = self.expect_index()?;
                doc.wires.push(WireDef {
                    source,
                    source_pin,
                    target,
                    target_pin,
                    line,
                });
            }
            "ON" => {
                self.advance()?;
                let name = self.expect(TokenKind::Identifier)?.text;
                doc.presets.push(PresetDef { name, line });
            }
            _ => {
                let kind = GateKind::from_keyword(&keyword).ok_or_else(|| {
                    ArchitectError::UnknownGateKind {
                        keyword: keyword.clone(),
                        line,
                    }
                })?;
                self.advance()?;
                let name = self.expect(TokenKind::Identifier)?.text;

                // Coordinates are optional, but come as a pair.
                let position = if self.current.kind == TokenKind::Number {
                    let x = self.expect_coordinate()?;
                    let y = self.expect_coordinate()?;
                    Some(Position::new(x, y))
                } else {
                    None
                };

                doc.gates.push(GateDef {
                    kind,
                    name,
                    position,
                    line,
                });
            }
        }

        Ok(())
    }

    /// A non-negative integer (pin index, level id).
    fn expect_index(&mut self) -> Result<usize> {
        let tok = self.expect(TokenKind::Number)?;
        tok.text.parse::<usize>().map_err(|_| {
            ArchitectError::parse(
                tok.line,
                format!("expected a non-negative integer, got '{}'", tok.text),
            )
        })
    }

    /// A canvas coordinate.
    fn expect_coordinate(&mut self) -> Result<f32> {
        let tok = self.expect(TokenKind::Number)?;
        tok.text.parse::<f32>().map_err(|_| {
            ArchitectError::parse(tok.line, format!("invalid number '{}'", tok.text))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_gate_line() {
        let doc = super::super::parse("AND and1 300 150").unwrap();
        assert_eq!(doc.gates.len(), 1);
        assert_eq!(doc.gates[0].kind, GateKind::And);
        assert_eq!(doc.gates[0].name, "and1");
        assert_eq!(doc.gates[0].position, Some(Position::new(300.0, 150.0)));
    }

    #[test]
    fn test_parse_gate_without_coordinates() {
        let doc = super::super::parse("NOT inv").unwrap();
        assert_eq!(doc.gates[0].position, None);
    }

    #[test]
    fn test_parse_wire_line() {
        let doc = super::super::parse("IN a\nAND g 0 0\nWIRE a 0 g 1").unwrap();
        assert_eq!(doc.wires.len(), 1);
        let wire = &doc.wires[0];
        assert_eq!(wire.source, "a");
        assert_eq!(wire.source_pin, 0);
        assert_eq!(wire.target, "g");
        assert_eq!(wire.target_pin, 1);
    }

    #[test]
    fn test_parse_level_directive_and_preset() {
        let doc = super::super::parse(".level 4\nIN a 50 100\nON a").unwrap();
        assert_eq!(doc.level, Some(4));
        assert_eq!(doc.presets.len(), 1);
        assert_eq!(doc.presets[0].name, "a");
    }

    #[test]
    fn test_parse_with_comments() {
        let input = "# full line comment\nIN a 50 100 ; trailing comment\n\nOUT led 800 100\n";
        let doc = super::super::parse(input).unwrap();
        assert_eq!(doc.gates.len(), 2);
    }

    #[test]
    fn test_unknown_kind_is_an_error() {
        let err = super::super::parse("RESISTOR r1 0 0").unwrap_err();
        assert!(matches!(
            err,
            ArchitectError::UnknownGateKind { ref keyword, line: 1 } if keyword == "RESISTOR"
        ));
    }

    #[test]
    fn test_negative_pin_is_an_error() {
        let err = super::super::parse("WIRE a -1 b 0").unwrap_err();
        assert!(matches!(err, ArchitectError::ParseError { .. }));
    }

    #[test]
    fn test_trailing_tokens_are_an_error() {
        let err = super::super::parse("ON a b").unwrap_err();
        assert!(matches!(err, ArchitectError::ParseError { line: 1, .. }));
    }

    #[test]
    fn test_line_numbers_in_errors() {
        let err = super::super::parse("IN a 50 100\nBOGUS x").unwrap_err();
        assert!(matches!(err, ArchitectError::UnknownGateKind { line: 2, .. }));
    }
}

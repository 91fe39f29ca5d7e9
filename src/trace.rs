use std::{
    fmt, fs,
    io::{BufRead, BufReader, Read},
    path::Path,
};

use xz2::read::XzDecoder;

use crate::error::SimError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessKind {
    Instruction,
    Data,
}

impl fmt::Display for AccessKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessKind::Instruction => f.write_str("I"),
            AccessKind::Data => f.write_str("D"),
        }
    }
}

/// One trace record, created once per line and never mutated.
#[derive(Debug, Clone, Copy)]
pub struct MemAccess {
    pub address: u32,
    pub kind: AccessKind,
}

/// Pull parser over `<I|D> <hex-address>` lines. Strictly synchronous: one
/// record per call, nothing read ahead. End of trace is end of input; an
/// address of zero is an ordinary access, not a sentinel.
pub struct TraceReader<R> {
    input: R,
    line: usize,
}

impl TraceReader<BufReader<Box<dyn Read>>> {
    /// Opens a trace file, transparently decompressing `.xz` input.
    pub fn open(path: &Path) -> Result<Self, SimError> {
        let file = fs::File::open(path)?;
        let stream: Box<dyn Read> = if path.extension().is_some_and(|ext| ext == "xz") {
            Box::new(XzDecoder::new(file))
        } else {
            Box::new(file)
        };
        Ok(TraceReader::new(BufReader::new(stream)))
    }
}

impl<R: BufRead> TraceReader<R> {
    pub fn new(input: R) -> Self {
        TraceReader { input, line: 0 }
    }

    pub fn next_access(&mut self) -> Result<Option<MemAccess>, SimError> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        self.line += 1;

        let mut tokens = buf.split_whitespace();
        let (Some(kind), Some(address)) = (tokens.next(), tokens.next()) else {
            return Err(SimError::TraceFormat(format!(
                "line {}: expected `<I|D> <hex address>`",
                self.line
            )));
        };
        if tokens.next().is_some() {
            return Err(SimError::TraceFormat(format!(
                "line {}: trailing input after address",
                self.line
            )));
        }

        let kind = match kind {
            "I" => AccessKind::Instruction,
            "D" => AccessKind::Data,
            other => {
                return Err(SimError::TraceFormat(format!(
                    "line {}: unknown access type `{other}`",
                    self.line
                )))
            }
        };

        let digits = address
            .strip_prefix("0x")
            .or_else(|| address.strip_prefix("0X"))
            .unwrap_or(address);
        let address = u32::from_str_radix(digits, 16).map_err(|_| {
            SimError::TraceFormat(format!(
                "line {}: invalid address `{address}`",
                self.line
            ))
        })?;

        Ok(Some(MemAccess { address, kind }))
    }
}

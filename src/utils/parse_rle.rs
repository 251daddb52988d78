use anyhow::{anyhow, bail, Context, Result};

/// Cells of a parsed RLE pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RlePattern {
    /// Height of the bounding box declared in the header.
    pub rows: usize,
    /// Width of the bounding box declared in the header.
    pub columns: usize,
    /// Alive cells as `(row, column)` pairs, in reading order.
    pub alive: Vec<(usize, usize)>,
}

fn parse_next_number(data: &[u8], i: &mut usize) -> Result<usize> {
    while *i < data.len() && !data[*i].is_ascii_digit() {
        *i += 1;
    }
    let start = *i;
    while *i < data.len() && data[*i].is_ascii_digit() {
        *i += 1;
    }
    if start == *i {
        bail!("Expected a number");
    }
    std::str::from_utf8(&data[start..*i])?
        .parse::<usize>()
        .context("Number in RLE is too large")
}

fn first_symbol(line: &[u8]) -> Option<u8> {
    line.iter().copied().find(|c| !c.is_ascii_whitespace())
}

/// Parses a two-state RLE pattern (`b` / `o` cells).
pub fn parse_rle(data: &[u8]) -> Result<RlePattern> {
    let mut lines = data.split(|&c| c == b'\n');
    // skipping comment and blank lines; the next line must start with 'x'
    let header = lines
        .by_ref()
        .find(|line| first_symbol(line).is_some_and(|c| c != b'#'))
        .ok_or_else(|| anyhow!("RLE header is missing"))?;
    if first_symbol(header) != Some(b'x') {
        bail!("RLE header must start with 'x'");
    }
    let (columns, rows) = {
        let mut i = 0;
        let width = parse_next_number(header, &mut i).context("Bad pattern width")?;
        let height = parse_next_number(header, &mut i).context("Bad pattern height")?;
        (width, height)
    };

    let body = lines.collect::<Vec<_>>().join(&b'\n');
    let mut alive = vec![];
    let (mut row, mut col, mut cnt) = (0usize, 0usize, 1usize);
    let mut i = 0;
    while i < body.len() {
        match body[i] {
            b'\n' | b'\r' | b' ' | b'\t' => i += 1,
            b'0'..=b'9' => cnt = parse_next_number(&body, &mut i)?,
            b'o' => {
                let end = col
                    .checked_add(cnt)
                    .filter(|&end| end <= columns && row < rows)
                    .ok_or_else(|| anyhow!("Pattern exceeds its declared size at row {}", row))?;
                alive.extend((col..end).map(|c| (row, c)));
                (col, cnt, i) = (end, 1, i + 1);
            }
            b'b' | b'.' => {
                let end = col
                    .checked_add(cnt)
                    .filter(|&end| end <= columns)
                    .ok_or_else(|| anyhow!("Pattern exceeds its declared width at row {}", row))?;
                (col, cnt, i) = (end, 1, i + 1);
            }
            b'$' => {
                let next_row = row
                    .checked_add(cnt)
                    .ok_or_else(|| anyhow!("Run count {} is too large", cnt))?;
                (row, col, cnt, i) = (next_row, 0, 1, i + 1);
            }
            b'!' => return Ok(RlePattern { rows, columns, alive }),
            c => bail!("Unexpected symbol {:?} in RLE", c as char),
        }
    }
    Err(anyhow!("RLE pattern is not terminated with '!'"))
}

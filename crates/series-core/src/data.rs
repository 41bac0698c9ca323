// File: crates/series-core/src/data.rs
// Summary: Embedded delimited-text blobs and their fixed schemas (the raw loader).
// Rows are newest-first on purpose; the sorter puts them in chronological order.

use std::fmt;
use std::str::FromStr;

use crate::error::SeriesError;
use crate::schema::Schema;

/// Daily closing prices, one value column.
pub const CLOSE_PRICES: &str = "\
01-May-20,58.13
30-Apr-20,53.98
27-Apr-20,67.00
26-Apr-20,89.70
25-Apr-20,99.00
24-Apr-20,130.28
23-Apr-20,166.70
20-Apr-20,234.98
19-Apr-20,345.44
18-Apr-20,443.34
17-Apr-20,543.70
16-Apr-20,580.13
13-Apr-20,605.23
12-Apr-20,622.77
11-Apr-20,626.20
10-Apr-20,628.44";

/// Closing and opening prices over the same days, two value columns.
pub const CLOSE_OPEN_PRICES: &str = "\
01-May-20,58.13,3.41
30-Apr-20,53.98,4.55
27-Apr-20,67.00,6.78
26-Apr-20,89.70,12.34
25-Apr-20,99.00,45.70
24-Apr-20,130.28,88.90
23-Apr-20,166.70,100.23
20-Apr-20,234.98,134.56
19-Apr-20,345.44,178.90
18-Apr-20,443.34,256.78
17-Apr-20,543.70,345.67
16-Apr-20,580.13,456.78
13-Apr-20,605.23,567.89
12-Apr-20,622.77,603.45
11-Apr-20,626.20,612.34
10-Apr-20,628.44,620.11";

/// One embedded variant: a constant blob plus the schema fixed for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dataset {
    Close,
    CloseOpen,
}

impl Dataset {
    pub fn all() -> [Dataset; 2] { [Dataset::Close, Dataset::CloseOpen] }

    pub fn name(&self) -> &'static str {
        match self {
            Dataset::Close => "close",
            Dataset::CloseOpen => "dual",
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            Dataset::Close => CLOSE_PRICES,
            Dataset::CloseOpen => CLOSE_OPEN_PRICES,
        }
    }

    pub fn schema(&self) -> Schema {
        match self {
            Dataset::Close => Schema::close(),
            Dataset::CloseOpen => Schema::close_open(),
        }
    }
}

impl FromStr for Dataset {
    type Err = SeriesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dataset::all()
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SeriesError::UnknownDataset(s.to_string()))
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//! Line-oriented serialization for [`TreeMap`]: one `key:value` record per
//! line, emitted in ascending key order. This module contains no search
//! logic; it is a thin adapter over the map's in-order traversal.

use std::fmt::Display;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::map::TreeMap;

impl<K, V> TreeMap<K, V> {
    /// Writes the map's pairs to the file at `path`, one `key:value` per
    /// line in ascending key order, using the `Display` rendering of the key
    /// and value. The file is created or truncated.
    ///
    /// No escaping is performed: a key containing a literal `:` will corrupt
    /// parsing on reload (the split takes the first `:`, so a `:` inside a
    /// *value* survives).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be created or written.
    pub fn dump<P: AsRef<Path>>(&self, path: P) -> Result<()>
    where
        K: Display,
        V: Display,
    {
        let mut writer = BufWriter::new(File::create(path)?);
        for (key, value) in self.iter() {
            writeln!(writer, "{}:{}", key, value)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Clears the map, then reads the file at `path` line by line, splitting
    /// each line on the first `:` and inserting the parsed pair via
    /// [`add`][TreeMap::add].
    ///
    /// Because [`dump`][TreeMap::dump] emits keys in ascending order, loading
    /// a dump re-inserts them in ascending order and rebuilds the map as a
    /// degenerate right-leaning chain.
    ///
    /// If an error cuts the load short, pairs parsed from earlier lines
    /// remain inserted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be opened or read, and
    /// [`Error::Parse`] naming the offending line if a line has no `:` or a
    /// token fails to parse.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<()>
    where
        K: Ord + FromStr,
        V: FromStr,
    {
        self.clear();
        let reader = BufReader::new(File::open(path)?);
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let malformed = || Error::Parse {
                line: index + 1,
                content: line.clone(),
            };

            let (key, value) = line.split_once(':').ok_or_else(malformed)?;
            let key = key.parse().map_err(|_| malformed())?;
            let value = value.parse().map_err(|_| malformed())?;
            self.add(key, value);
        }
        Ok(())
    }
}

//! MAX7219 8x8 LED-Matrix Treiber und Scan-Muster
//!
//! Der Treiber arbeitet nur gegen `embedded_hal::spi::SpiDevice`.
//! Chip-Select übernimmt das SpiDevice (z.B. `ExclusiveDevice`), jede
//! Register-Schreiboperation ist genau eine 16-Bit Transaktion `[reg, value]`.

use embedded_hal::spi::SpiDevice;

/// Anzahl Zeilen/Spalten der Matrix
pub const MATRIX_SIZE: usize = 8;

/// Ein Bild: ein Byte pro Zeile, Bit n = Spalte n
pub type Frame = [u8; MATRIX_SIZE];

/// Leeres Bild
pub const BLANK: Frame = [0; MATRIX_SIZE];

/// MAX7219 Register-Adressen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Register {
    NoOp,
    /// Zeilen-Register 0..=7 (Adressen 0x01..=0x08), siehe `Register::digit`
    Digit(u8),
    DecodeMode,
    Intensity,
    ScanLimit,
    Shutdown,
    DisplayTest,
}

impl Register {
    /// Zeilen-Register mit geprüftem Index
    pub const fn digit(row: u8) -> Result<Self, MatrixError> {
        match check_index(row) {
            Ok(()) => Ok(Register::Digit(row)),
            Err(e) => Err(e),
        }
    }

    /// Register-Adresse auf dem Bus
    ///
    /// `Digit(n)` mit n >= 8 hat keine Adresse (0x09 wäre bereits DecodeMode).
    pub const fn addr(self) -> Result<u8, MatrixError> {
        match self {
            Register::NoOp => Ok(0x00),
            Register::Digit(row) => match check_index(row) {
                Ok(()) => Ok(row + 1),
                Err(e) => Err(e),
            },
            Register::DecodeMode => Ok(0x09),
            Register::Intensity => Ok(0x0A),
            Register::ScanLimit => Ok(0x0B),
            Register::Shutdown => Ok(0x0C),
            Register::DisplayTest => Ok(0x0F),
        }
    }
}

/// Fehler-Typ für Matrix-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// SPI-Transfer fehlgeschlagen
    Transfer,
    /// Zeile/Spalte/Helligkeit außerhalb des gültigen Bereichs
    InvalidIndex,
}

/// MAX7219 Treiber
pub struct Max7219<SPI> {
    spi: SPI,
}

impl<SPI: SpiDevice> Max7219<SPI> {
    pub fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Schreibt ein Register
    ///
    /// Ein ungültiges `Digit` wird ohne SPI-Transfer abgelehnt.
    pub fn write_reg(&mut self, reg: Register, value: u8) -> Result<(), MatrixError> {
        let addr = reg.addr()?;
        self.spi
            .write(&[addr, value])
            .map_err(|_| MatrixError::Transfer)
    }

    /// Initialisiert den Chip für eine 8x8 Matrix ohne BCD-Dekodierung
    ///
    /// Reihenfolge: Display-Test aus, alle 8 Zeilen scannen, keine Dekodierung,
    /// Normalbetrieb, Matrix löschen.
    pub fn init(&mut self) -> Result<(), MatrixError> {
        self.write_reg(Register::DisplayTest, 0)?;
        self.write_reg(Register::ScanLimit, (MATRIX_SIZE - 1) as u8)?;
        self.write_reg(Register::DecodeMode, 0)?;
        self.shutdown(false)?;
        self.clear()
    }

    /// Shutdown-Modus (`true`) oder Normalbetrieb (`false`)
    pub fn shutdown(&mut self, off: bool) -> Result<(), MatrixError> {
        self.write_reg(Register::Shutdown, if off { 0 } else { 1 })
    }

    /// Helligkeit 0..=15
    pub fn set_intensity(&mut self, level: u8) -> Result<(), MatrixError> {
        if level > 0x0F {
            return Err(MatrixError::InvalidIndex);
        }
        self.write_reg(Register::Intensity, level)
    }

    /// Alle LEDs aus
    pub fn clear(&mut self) -> Result<(), MatrixError> {
        self.show(&BLANK)
    }

    /// Schaltet eine komplette Zeile ein (andere Zeilen bleiben unverändert)
    pub fn set_row(&mut self, row: u8) -> Result<(), MatrixError> {
        self.write_reg(Register::digit(row)?, 0xFF)
    }

    /// Schaltet eine Spalte in allen Zeilen ein (überschreibt alle Zeilen)
    pub fn set_column(&mut self, column: u8) -> Result<(), MatrixError> {
        self.show(&column_frame(column)?)
    }

    /// Schreibt ein komplettes Bild
    pub fn show(&mut self, frame: &Frame) -> Result<(), MatrixError> {
        for (row, bits) in frame.iter().enumerate() {
            self.write_reg(Register::Digit(row as u8), *bits)?;
        }
        Ok(())
    }

    /// Gibt das SpiDevice zurück
    pub fn release(self) -> SPI {
        self.spi
    }
}

const fn check_index(index: u8) -> Result<(), MatrixError> {
    if (index as usize) < MATRIX_SIZE {
        Ok(())
    } else {
        Err(MatrixError::InvalidIndex)
    }
}

// ============================================================================
// Scan-Muster
// ============================================================================

/// Richtung eines Scan-Schritts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanAxis {
    Row,
    Column,
}

/// Ein Schritt des Scan-Musters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanStep {
    pub axis: ScanAxis,
    pub index: u8,
    pub frame: Frame,
}

/// Bild mit genau einer leuchtenden Zeile
pub const fn row_frame(row: u8) -> Result<Frame, MatrixError> {
    match check_index(row) {
        Ok(()) => Ok(lit_row(row as usize)),
        Err(e) => Err(e),
    }
}

/// Bild mit genau einer leuchtenden Spalte
pub const fn column_frame(column: u8) -> Result<Frame, MatrixError> {
    match check_index(column) {
        Ok(()) => Ok(lit_column(column as usize)),
        Err(e) => Err(e),
    }
}

// Index wird vom Aufrufer auf 0..MATRIX_SIZE begrenzt
const fn lit_row(row: usize) -> Frame {
    let mut frame = BLANK;
    frame[row] = 0xFF;
    frame
}

const fn lit_column(column: usize) -> Frame {
    [1 << column; MATRIX_SIZE]
}

/// Endloses Lauflicht: Zeilen 0..7, danach Spalten 0..7, dann von vorn
#[derive(Debug, Clone, Default)]
pub struct ScanPattern {
    step: usize,
}

impl ScanPattern {
    /// Anzahl Schritte pro Durchlauf
    pub const STEPS: usize = 2 * MATRIX_SIZE;

    pub const fn new() -> Self {
        Self { step: 0 }
    }
}

impl Iterator for ScanPattern {
    type Item = ScanStep;

    fn next(&mut self) -> Option<Self::Item> {
        let step = self.step;
        self.step = (self.step + 1) % Self::STEPS;

        let index = step % MATRIX_SIZE;
        let item = if step < MATRIX_SIZE {
            ScanStep {
                axis: ScanAxis::Row,
                index: index as u8,
                frame: lit_row(index),
            }
        } else {
            ScanStep {
                axis: ScanAxis::Column,
                index: index as u8,
                frame: lit_column(index),
            }
        };
        Some(item)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for MatrixError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            MatrixError::Transfer => defmt::write!(fmt, "SPI transfer failed"),
            MatrixError::InvalidIndex => defmt::write!(fmt, "Invalid index"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ScanStep {
    fn format(&self, fmt: defmt::Formatter) {
        match self.axis {
            ScanAxis::Row => defmt::write!(fmt, "Row {}", self.index),
            ScanAxis::Column => defmt::write!(fmt, "Column {}", self.index),
        }
    }
}

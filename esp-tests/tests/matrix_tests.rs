//! Integration Tests für den MAX7219 Treiber
//!
//! Diese Tests laufen auf dem Host (x86_64) und nutzen MockSpi,
//! das jede Transaktion als Byte-Folge mitschreibt.

use embedded_hal::spi::{ErrorKind, ErrorType, Operation, SpiDevice};
use esp_core::matrix::{column_frame, row_frame};
use esp_core::{Max7219, MatrixError, Register, ScanAxis, ScanPattern};

// ============================================================================
// Mock SPI Device
// ============================================================================

#[derive(Default)]
pub struct MockSpi {
    /// Geschriebene Bytes pro Transaktion (eine Transaktion = ein CS-Zyklus)
    pub transactions: Vec<Vec<u8>>,
    pub fail_next_transaction: bool,
}

impl MockSpi {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ErrorType for MockSpi {
    type Error = ErrorKind;
}

impl SpiDevice for MockSpi {
    fn transaction(&mut self, operations: &mut [Operation<'_, u8>]) -> Result<(), Self::Error> {
        if self.fail_next_transaction {
            self.fail_next_transaction = false;
            return Err(ErrorKind::Other);
        }

        let mut bytes = Vec::new();
        for op in operations.iter() {
            match op {
                Operation::Write(data) => bytes.extend_from_slice(data),
                Operation::Transfer(_, data) => bytes.extend_from_slice(data),
                Operation::TransferInPlace(data) => bytes.extend_from_slice(data),
                Operation::Read(_) | Operation::DelayNs(_) => {}
            }
        }
        self.transactions.push(bytes);
        Ok(())
    }
}

fn pairs(spi: &MockSpi) -> Vec<[u8; 2]> {
    spi.transactions
        .iter()
        .map(|t| {
            assert_eq!(t.len(), 2, "jede Transaktion muss genau 2 Bytes haben");
            [t[0], t[1]]
        })
        .collect()
}

// ============================================================================
// Tests: Treiber
// ============================================================================

#[test]
fn test_init_sequence() {
    let mut matrix = Max7219::new(MockSpi::new());
    matrix.init().unwrap();
    let spi = matrix.release();

    let mut expected = vec![[0x0F, 0], [0x0B, 7], [0x09, 0], [0x0C, 1]];
    for row in 1..=8u8 {
        expected.push([row, 0x00]);
    }
    assert_eq!(pairs(&spi), expected);
}

#[test]
fn test_set_row_writes_single_register() {
    let mut matrix = Max7219::new(MockSpi::new());
    matrix.set_row(3).unwrap();
    let spi = matrix.release();

    assert_eq!(pairs(&spi), vec![[0x04, 0xFF]]);
}

#[test]
fn test_set_column_writes_all_rows() {
    let mut matrix = Max7219::new(MockSpi::new());
    matrix.set_column(5).unwrap();
    let spi = matrix.release();

    let expected: Vec<[u8; 2]> = (1..=8u8).map(|row| [row, 1 << 5]).collect();
    assert_eq!(pairs(&spi), expected);
}

#[test]
fn test_invalid_index_is_rejected_without_transfer() {
    let mut matrix = Max7219::new(MockSpi::new());
    assert_eq!(matrix.set_row(8), Err(MatrixError::InvalidIndex));
    assert_eq!(matrix.set_column(9), Err(MatrixError::InvalidIndex));
    assert_eq!(matrix.set_intensity(16), Err(MatrixError::InvalidIndex));
    assert!(matrix.release().transactions.is_empty());
}

#[test]
fn test_write_reg_rejects_digit_beyond_matrix() {
    let mut matrix = Max7219::new(MockSpi::new());
    // Digit(8) läge auf 0x09 (DecodeMode) und darf nie auf den Bus
    assert_eq!(
        matrix.write_reg(Register::Digit(8), 0xFF),
        Err(MatrixError::InvalidIndex)
    );
    assert_eq!(
        matrix.write_reg(Register::Digit(255), 0xFF),
        Err(MatrixError::InvalidIndex)
    );
    assert!(matrix.release().transactions.is_empty());
}

#[test]
fn test_frame_helpers_reject_index_beyond_matrix() {
    assert_eq!(row_frame(8), Err(MatrixError::InvalidIndex));
    assert_eq!(column_frame(8), Err(MatrixError::InvalidIndex));
    assert_eq!(column_frame(255), Err(MatrixError::InvalidIndex));
}

#[test]
fn test_intensity_and_shutdown() {
    let mut matrix = Max7219::new(MockSpi::new());
    matrix.set_intensity(0x0F).unwrap();
    matrix.shutdown(true).unwrap();
    matrix.shutdown(false).unwrap();
    let spi = matrix.release();

    assert_eq!(pairs(&spi), vec![[0x0A, 0x0F], [0x0C, 0], [0x0C, 1]]);
}

#[test]
fn test_transfer_error_is_mapped() {
    let mut spi = MockSpi::new();
    spi.fail_next_transaction = true;
    let mut matrix = Max7219::new(spi);

    assert_eq!(matrix.init(), Err(MatrixError::Transfer));
    // Init bricht beim ersten Fehler ab
    assert!(matrix.release().transactions.is_empty());
}

#[test]
fn test_row_via_frame_matches_clear_and_set_row() {
    // clear() + set_row(i) ergibt dieselben Register-Inhalte wie show(row_frame(i))
    let mut a = Max7219::new(MockSpi::new());
    a.clear().unwrap();
    a.set_row(2).unwrap();
    let mut regs_a = [0u8; 9];
    for [reg, value] in pairs(&a.release()) {
        regs_a[reg as usize] = value;
    }

    let mut b = Max7219::new(MockSpi::new());
    b.show(&row_frame(2).unwrap()).unwrap();
    let mut regs_b = [0u8; 9];
    for [reg, value] in pairs(&b.release()) {
        regs_b[reg as usize] = value;
    }

    assert_eq!(regs_a, regs_b);
}

// ============================================================================
// Tests: Scan-Muster
// ============================================================================

#[test]
fn test_scan_pattern_full_cycle() {
    let steps: Vec<_> = ScanPattern::new().take(ScanPattern::STEPS).collect();

    for (i, step) in steps.iter().take(8).enumerate() {
        assert_eq!(step.axis, ScanAxis::Row);
        assert_eq!(step.index as usize, i);
        assert_eq!(Ok(step.frame), row_frame(i as u8));
    }
    for (i, step) in steps.iter().skip(8).enumerate() {
        assert_eq!(step.axis, ScanAxis::Column);
        assert_eq!(step.index as usize, i);
        assert_eq!(Ok(step.frame), column_frame(i as u8));
    }
}

#[test]
fn test_scan_pattern_drives_matrix() {
    let mut matrix = Max7219::new(MockSpi::new());
    for step in ScanPattern::new().take(ScanPattern::STEPS) {
        matrix.show(&step.frame).unwrap();
    }
    let spi = matrix.release();

    // 16 Bilder à 8 Zeilen
    assert_eq!(spi.transactions.len(), 16 * 8);
    // Letztes Bild: Spalte 7 in allen Zeilen
    assert_eq!(pairs(&spi)[16 * 8 - 1], [0x08, 0x80]);
}

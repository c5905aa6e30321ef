//! Integration tests for opening and closing DGN files

mod common;

use common::*;
use dgnrust::{
    DgnError, DgnHandle, DgnOptions, DgnReaderConfiguration, Dimension, ElementIndex, ElementInfo,
    ElementInfoFlags, ErrorCode, HeaderSignature,
};
use std::cell::Cell;
use std::io::{Read, Seek};
use std::rc::Rc;

#[test]
fn test_open_2d_file() {
    let path = write_scratch("open_2d.dgn", &header_bytes(&DESIGN_2D, 512));
    let dgn = DgnHandle::open(&path, false).unwrap();
    assert_eq!(dgn.dimension(), Dimension::Two);
    assert_eq!(dgn.signature(), HeaderSignature::Design2D);
    assert!(!dgn.is_update());
    assert_eq!(dgn.path(), Some(path.as_path()));
    dgn.close();
}

#[test]
fn test_open_3d_file() {
    let path = write_scratch("open_3d.dgn", &header_bytes(&DESIGN_3D, 2048));
    let dgn = DgnHandle::open(&path, false).unwrap();
    assert_eq!(dgn.dimension(), Dimension::Three);
    dgn.close();
}

#[test]
fn test_open_cell_library_is_2d() {
    let path = write_scratch("open_cell.cel", &header_bytes(&CELL_LIBRARY, 100));
    let dgn = DgnHandle::open(&path, false).unwrap();
    assert_eq!(dgn.dimension(), Dimension::Two);
    assert_eq!(dgn.signature(), HeaderSignature::CellLibrary);
}

#[test]
fn test_open_tiny_file_is_accepted() {
    let path = write_scratch("open_tiny.dgn", &[0xC8, 0x09]);
    let dgn = DgnHandle::open(&path, false).unwrap();
    assert_eq!(dgn.signature(), HeaderSignature::Indeterminate);
    assert_eq!(dgn.dimension(), Dimension::Three);
}

#[test]
fn test_open_for_update() {
    let path = write_scratch("open_update.dgn", &header_bytes(&DESIGN_2D, 512));
    let dgn = DgnHandle::open(&path, true).unwrap();
    assert!(dgn.is_update());
}

#[test]
fn test_open_nonexistent_file() {
    let path = test_output_path("does_not_exist.dgn");
    let _ = std::fs::remove_file(&path);
    let err = DgnHandle::open(&path, false).unwrap_err();
    assert!(matches!(err, DgnError::OpenFailed { .. }));
    assert_eq!(err.code(), ErrorCode::OpenFailed);
    assert!(err.to_string().contains("does_not_exist.dgn"));
}

#[test]
fn test_open_wrong_format() {
    let path = write_scratch("open_wrong.dxf", b"  0\nSECTION\n  2\nHEADER\n");
    let err = DgnHandle::open(&path, false).unwrap_err();
    assert!(matches!(err, DgnError::FormatMismatch { .. }));
    assert_eq!(err.code(), ErrorCode::AppDefined);
}

#[test]
fn test_format_mismatch_releases_stream() {
    let live = Rc::new(Cell::new(0));
    let reader = ProbeReader::new(header_bytes(&[0x00, 0x01, 0x02, 0x03], 512), &live);
    assert_eq!(live.get(), 1);

    let result = DgnHandle::from_reader(reader);
    assert!(matches!(result, Err(DgnError::FormatMismatch { .. })));
    assert_eq!(live.get(), 0);
}

#[test]
fn test_close_releases_stream_once() {
    let live = Rc::new(Cell::new(0));
    let dgn = DgnHandle::from_reader(ProbeReader::new(header_bytes(&DESIGN_2D, 512), &live)).unwrap();
    assert_eq!(live.get(), 1);
    dgn.close();
    assert_eq!(live.get(), 0);
}

#[test]
fn test_close_with_built_index() {
    let live = Rc::new(Cell::new(0));
    let mut dgn =
        DgnHandle::from_reader(ProbeReader::new(header_bytes(&DESIGN_2D, 512), &live)).unwrap();
    dgn.install_element_index(
        [ElementInfo {
            level: 8,
            element_type: 9,
            stype: 0,
            flags: ElementInfoFlags::empty(),
            offset: 0,
        }]
        .into_iter()
        .collect::<ElementIndex>(),
    );
    assert_eq!(dgn.element_count(), 1);
    dgn.close();
    assert_eq!(live.get(), 0);
}

#[test]
fn test_header_available_to_element_reading() {
    let mut bytes = header_bytes(&DESIGN_2D, 1536);
    bytes[1535] = 0xAB;
    let path = write_scratch("open_rewind.dgn", &bytes);
    let mut dgn = DgnHandle::open(&path, false).unwrap();

    assert_eq!(dgn.stream_mut().stream_position().unwrap(), 0);
    let mut all = Vec::new();
    dgn.stream_mut().read_to_end(&mut all).unwrap();
    assert_eq!(all, bytes);
}

#[test]
fn test_custom_header_size() {
    let config = DgnReaderConfiguration {
        header_size: 4,
        options: DgnOptions::CAPTURE_RAW_DATA,
    };
    let live = Rc::new(Cell::new(0));
    let dgn = DgnHandle::from_reader_with_config(
        ProbeReader::new(header_bytes(&DESIGN_3D, 4096), &live),
        config,
    )
    .unwrap();
    assert_eq!(dgn.dimension(), Dimension::Three);
    assert!(dgn.options().contains(DgnOptions::CAPTURE_RAW_DATA));
}

#[test]
fn test_zero_header_size_accepts_anything() {
    let config = DgnReaderConfiguration {
        header_size: 0,
        ..Default::default()
    };
    let live = Rc::new(Cell::new(0));
    let dgn = DgnHandle::from_reader_with_config(
        ProbeReader::new(b"not a dgn".to_vec(), &live),
        config,
    )
    .unwrap();
    assert_eq!(dgn.signature(), HeaderSignature::Indeterminate);
    assert_eq!(dgn.dimension(), Dimension::Two);
}

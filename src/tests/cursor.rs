use crate::{
    Be, BigEndian, BytesError, Endianness, FromBytes, HOST, Le, LittleEndian, NetworkEndian,
    ToBytes, WireReader, WireWriter,
};

/// Claims four bytes more than the buffer it is handed.
#[derive(Debug, PartialEq)]
struct Overreporting;

impl ToBytes for Overreporting {
    fn to_bytes(&self, buf: &mut [u8]) -> Result<usize, BytesError> {
        Ok(buf.len() + 4)
    }
}

impl FromBytes for Overreporting {
    fn from_bytes(buf: &[u8]) -> Result<(Self, usize), BytesError> {
        Ok((Self, buf.len() + 4))
    }
}

#[test]
fn writer_starts_empty() {
    let mut buf = [0u8; 8];
    let w = WireWriter::new(&mut buf);
    assert_eq!(w.position(), 0);
    assert_eq!(w.remaining(), 8);
    assert!(w.written().is_empty());
}

#[test]
fn writer_mixed_orders() {
    let mut buf = [0u8; 14];
    let mut w = WireWriter::new(&mut buf);

    assert_eq!(w.put_be(0x0102u16), Ok(2));
    assert_eq!(w.put_le(0x0304_0506u32), Ok(4));
    assert_eq!(w.put::<NetworkEndian, u64>(0x0708_090a_0b0c_0d0e), Ok(8));
    assert_eq!(w.position(), 14);
    assert_eq!(w.remaining(), 0);

    assert_eq!(
        w.into_written(),
        &[0x01, 0x02, 0x06, 0x05, 0x04, 0x03, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e]
    );
}

#[test]
fn writer_runtime_order() {
    let mut buf = [0u8; 8];
    let mut w = WireWriter::new(&mut buf);

    w.put_in(Endianness::Big, 0xaabbu16).unwrap();
    w.put_in(Endianness::Little, 0xaabbu16).unwrap();
    w.put_in(HOST, 0xccddu16).unwrap();
    w.put_in(HOST.opposite(), 0xccddu16).unwrap();

    let written = w.written();
    assert_eq!(&written[..4], &[0xaa, 0xbb, 0xbb, 0xaa]);
    assert_eq!(&written[4..6], &0xccddu16.to_ne_bytes());
    assert_eq!(&written[6..8], &0xccddu16.swap_bytes().to_ne_bytes());
}

#[test]
fn writer_short_buffer_does_not_advance() {
    let mut buf = [0u8; 5];
    let mut w = WireWriter::new(&mut buf);

    w.put_be(1u32).unwrap();
    assert_eq!(
        w.put_be(2u16),
        Err(BytesError::BufferTooSmall {
            needed: 2,
            available: 1
        })
    );
    assert_eq!(w.position(), 4);

    assert!(w.put_bytes(&Le(9u64)).is_err());
    assert_eq!(w.position(), 4);
}

#[test]
fn writer_accepts_codec_values() {
    let mut buf = [0u8; 6];
    let mut w = WireWriter::new(&mut buf);

    assert_eq!(w.put_bytes(&Be(0x1122u16)), Ok(2));
    assert_eq!(w.put_bytes(&Le(0x3344_5566u32)), Ok(4));
    assert_eq!(w.written(), &[0x11, 0x22, 0x66, 0x55, 0x44, 0x33]);
}

#[test]
fn reader_mixed_orders() {
    let bytes = [
        0x01, 0x02, 0x06, 0x05, 0x04, 0x03, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e,
    ];
    let mut r = WireReader::new(&bytes);

    assert_eq!(r.get_be::<u16>(), Ok(0x0102));
    assert_eq!(r.get_le::<u32>(), Ok(0x0304_0506));
    assert_eq!(r.get::<BigEndian, u64>(), Ok(0x0708_090a_0b0c_0d0e));
    assert!(r.is_empty());
    assert_eq!(r.position(), 14);
}

#[test]
fn reader_runtime_order() {
    let bytes = [0xaa, 0xbb, 0xbb, 0xaa];
    let mut r = WireReader::new(&bytes);

    assert_eq!(r.get_in::<u16>(Endianness::Big), Ok(0xaabb));
    assert_eq!(r.get_in::<u16>(Endianness::Little), Ok(0xaabb));
}

#[test]
fn reader_short_buffer_does_not_advance() {
    let bytes = [1, 2, 3];
    let mut r = WireReader::new(&bytes);

    assert_eq!(
        r.get_le::<u32>(),
        Err(BytesError::UnexpectedEof {
            needed: 4,
            available: 3
        })
    );
    assert_eq!(r.position(), 0);
    assert_eq!(r.rest(), &[1, 2, 3]);

    assert_eq!(r.get::<LittleEndian, u16>(), Ok(0x0201));
    assert_eq!(r.remaining(), 1);
    assert!(r.get_bytes::<Be<u16>>().is_err());
    assert_eq!(r.rest(), &[3]);
}

#[test]
fn writer_and_reader_agree() {
    let mut buf = [0u8; 28];
    let mut w = WireWriter::new(&mut buf);
    for order in Endianness::VARIANTS {
        w.put_in(order, 0xfedcu16).unwrap();
        w.put_in(order, 0xfedc_ba98u32).unwrap();
        w.put_in(order, 0xfedc_ba98_7654_3210u64).unwrap();
    }
    assert_eq!(w.remaining(), 0);

    let mut r = WireReader::new(&buf);
    for order in Endianness::VARIANTS {
        assert_eq!(r.get_in::<u16>(order), Ok(0xfedc));
        assert_eq!(r.get_in::<u32>(order), Ok(0xfedc_ba98));
        assert_eq!(r.get_in::<u64>(order), Ok(0xfedc_ba98_7654_3210));
    }
    assert!(r.is_empty());
}

#[test]
fn writer_rejects_overreported_length() {
    let mut buf = [0u8; 2];
    let mut w = WireWriter::new(&mut buf);

    assert_eq!(
        w.put_bytes(&Overreporting),
        Err(BytesError::BufferTooSmall {
            needed: 6,
            available: 2
        })
    );
    assert_eq!(w.position(), 0);
    assert_eq!(w.remaining(), 2);
    assert!(w.written().is_empty());

    assert_eq!(w.put_le(0x0102u16), Ok(2));
    assert_eq!(w.into_written(), &[0x02, 0x01]);
}

#[test]
fn reader_rejects_overreported_length() {
    let bytes = [1, 2];
    let mut r = WireReader::new(&bytes);

    assert_eq!(
        r.get_bytes::<Overreporting>(),
        Err(BytesError::UnexpectedEof {
            needed: 6,
            available: 2
        })
    );
    assert_eq!(r.position(), 0);
    assert_eq!(r.remaining(), 2);
    assert_eq!(r.rest(), &[1, 2]);

    assert_eq!(r.get_be::<u16>(), Ok(0x0102));
    assert!(r.is_empty());
}

#[cfg(feature = "tracing")]
mod traced {
    use tracing_test::traced_test;

    use crate::{WireReader, WireWriter};

    #[test]
    #[traced_test]
    fn short_write_is_traced() {
        let mut buf = [0u8; 1];
        let mut w = WireWriter::new(&mut buf);
        assert!(w.put_be(1u32).is_err());
        assert!(logs_contain("wire write past end of buffer"));
    }

    #[test]
    #[traced_test]
    fn short_read_is_traced() {
        let mut r = WireReader::new(&[]);
        assert!(r.get_le::<u64>().is_err());
        assert!(logs_contain("wire read past end of buffer"));
    }
}

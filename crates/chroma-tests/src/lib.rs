//! Integration tests for chroma-rs crates.
//!
//! This crate contains end-to-end tests that verify the interaction
//! between the domain model, the conversion registry/resolver and the
//! streaming pipeline.


#[cfg(test)]
mod front_door {
    use chroma_convert::{ConversionRequest, ConvertError};
    use chroma_core::{Colorspace, Pixel, Range};
    use chroma_stream::{run, VecSink, VecSource};

    fn fields(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_inferred_request_streams_end_to_end() {
        let request = ConversionRequest {
            from: None,
            fields: Some(fields(&["name", "r", "g", "b", "t"])),
            to: Colorspace::YCbCr,
            output_type: Range::Ub,
        };
        let prepared = request.prepare(Some(Range::Ub)).unwrap();
        assert_eq!(prepared.from, Colorspace::Rgb);
        assert_eq!(
            prepared.fields,
            fields(&["name", "channel0", "channel1", "channel2", "t"])
        );

        let mut sink = VecSink::<u8>::new();
        let count = run(
            &prepared.bound,
            &mut VecSource::new(vec![
                Pixel::<u8>::new(128, 128, 128),
                Pixel::<u8>::new(0, 0, 0),
            ]),
            &mut sink,
            false,
        )
        .unwrap();
        assert_eq!(count, 2);
        assert_eq!(sink.records()[0], Pixel::new(126, 128, 128));
        assert_eq!(sink.records()[1], Pixel::new(16, 128, 128));
    }

    #[test]
    fn test_declared_ycbcr_request_needs_no_format() {
        let request = ConversionRequest {
            from: Some(Colorspace::YCbCr),
            fields: Some(fields(&["y", "cb", "cr"])),
            to: Colorspace::Rgb,
            output_type: Range::Ub,
        };
        let prepared = request.prepare(None).unwrap();
        assert_eq!(prepared.bound.source().range, Range::Ub);

        let mut sink = VecSink::<u8>::new();
        run(
            &prepared.bound,
            &mut VecSource::new(vec![Pixel::<u8>::new(126, 128, 128)]),
            &mut sink,
            false,
        )
        .unwrap();
        assert_eq!(sink.records(), &[Pixel::<u8>::new(128, 128, 128)]);
    }

    #[test]
    fn test_widened_output_storage_request() {
        // ub-range destination carried in f64 storage: values identical
        let request = ConversionRequest {
            from: Some(Colorspace::Rgb),
            fields: None,
            to: Colorspace::YCbCr,
            output_type: Range::D,
        };
        let prepared = request.prepare(Some(Range::Ub)).unwrap();
        let mut sink = VecSink::<f64>::new();
        run(
            &prepared.bound,
            &mut VecSource::new(vec![Pixel::<u8>::new(128, 128, 128)]),
            &mut sink,
            false,
        )
        .unwrap();
        // unrounded double output of the digital transform
        approx::assert_relative_eq!(sink.records()[0].channel0, 125.9295, max_relative = 1e-10);
    }

    #[test]
    fn test_analog_destination_rejects_integer_storage() {
        let request = ConversionRequest {
            from: Some(Colorspace::Rgb),
            fields: None,
            to: Colorspace::YPbPr,
            output_type: Range::Ui,
        };
        let err = request.prepare(Some(Range::F)).unwrap_err();
        assert_eq!(
            err,
            ConvertError::IncompatibleStorageType { range: Range::F, storage: Range::Ui }
        );
    }
}

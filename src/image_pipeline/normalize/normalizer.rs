use tracing::debug;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::frame::{PixelType, Sample};
use crate::image_pipeline::normalize::mapping::{ByteMapping, Extrema};
use crate::image_pipeline::normalize::types::{
    ChannelStatistics, ImageStatistics, ManualLimits, ScalePolicy,
};

/// Transfer function chosen for one frame plus the statistics it reports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalization {
    pub mapping: ByteMapping,
    pub channel_stats: Option<ChannelStatistics>,
    pub image_stats: Option<ImageStatistics>,
}

/// Chooses the byte mapping for `data` under `policy`.
///
/// The raw buffer is scanned at most once, and only when the mapping or the
/// requested statistics need its extrema. Statistics are `None` unless
/// `show_limits` is set. Image statistics describe the full-resolution
/// normalized buffer; the mapping is monotone, so they follow from the
/// channel extrema without mapping every sample.
pub fn plan<T: Sample>(
    data: &[T],
    policy: ScalePolicy,
    manual_limits: &ManualLimits,
    show_limits: bool,
) -> Result<Normalization> {
    let pass_through = policy == ScalePolicy::PassThrough && T::PIXEL_TYPE == PixelType::U8;

    let normalization = if pass_through {
        Normalization {
            mapping: ByteMapping::Identity,
            channel_stats: show_limits.then(ChannelStatistics::default),
            image_stats: show_limits
                .then(|| image_statistics(ByteMapping::Identity, Extrema::scan(data))),
        }
    } else if policy == ScalePolicy::Manual {
        manual_limits.validate()?;
        let mapping = ByteMapping::Linear {
            low: manual_limits.low(),
            high: manual_limits.high(),
        };
        let extrema = show_limits.then(|| Extrema::scan(data)).flatten();
        Normalization {
            mapping,
            channel_stats: show_limits.then(|| channel_statistics(extrema)),
            image_stats: show_limits.then(|| image_statistics(mapping, extrema)),
        }
    } else {
        let extrema = Extrema::scan(data);
        let mapping = match extrema {
            Some(e) => ByteMapping::Linear {
                low: e.min,
                high: e.max,
            },
            None => ByteMapping::Linear {
                low: 0.0,
                high: 0.0,
            },
        };
        Normalization {
            mapping,
            channel_stats: show_limits.then(|| channel_statistics(extrema)),
            image_stats: show_limits.then(|| image_statistics(mapping, extrema)),
        }
    };

    debug!(
        pixel_type = %T::PIXEL_TYPE,
        ?policy,
        mapping = ?normalization.mapping,
        "Selected byte mapping"
    );
    Ok(normalization)
}

fn channel_statistics(extrema: Option<Extrema>) -> ChannelStatistics {
    match extrema {
        Some(e) => ChannelStatistics {
            data_min: e.min,
            data_max: e.max,
        },
        None => ChannelStatistics {
            data_min: f64::NAN,
            data_max: f64::NAN,
        },
    }
}

fn image_statistics(mapping: ByteMapping, extrema: Option<Extrema>) -> ImageStatistics {
    match extrema {
        // NaN samples land on 0
        Some(e) => ImageStatistics {
            image_min: if e.has_nan { 0 } else { mapping.apply(e.min) },
            image_max: mapping.apply(e.max),
        },
        None => ImageStatistics {
            image_min: 0,
            image_max: 0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_pipeline::common::error::PipelineError;

    fn normalized<T: Sample>(data: &[T], n: &Normalization) -> Vec<u8> {
        data.iter().map(|&v| n.mapping.apply_sample(v)).collect()
    }

    #[test]
    fn test_pass_through_is_identity_for_bytes() {
        let data: Vec<u8> = vec![7, 0, 255, 128, 3];
        let n = plan(&data, ScalePolicy::PassThrough, &ManualLimits::default(), true).unwrap();

        assert_eq!(n.mapping, ByteMapping::Identity);
        assert_eq!(normalized(&data, &n), data);
        assert_eq!(
            n.channel_stats,
            Some(ChannelStatistics {
                data_min: 0.0,
                data_max: 255.0
            })
        );
        assert_eq!(
            n.image_stats,
            Some(ImageStatistics {
                image_min: 0,
                image_max: 255
            })
        );
    }

    #[test]
    fn test_pass_through_reports_fixed_channel_limits_without_scanning() {
        let data: Vec<u8> = vec![40, 50, 60];
        let n = plan(&data, ScalePolicy::PassThrough, &ManualLimits::default(), true).unwrap();
        assert_eq!(n.channel_stats, Some(ChannelStatistics::default()));
        assert_eq!(
            n.image_stats,
            Some(ImageStatistics {
                image_min: 40,
                image_max: 60
            })
        );
    }

    #[test]
    fn test_pass_through_falls_back_to_auto_for_wide_types() {
        let data: Vec<u16> = vec![1000, 3000, 2000];
        let n = plan(&data, ScalePolicy::PassThrough, &ManualLimits::default(), false).unwrap();
        assert_eq!(
            n.mapping,
            ByteMapping::Linear {
                low: 1000.0,
                high: 3000.0
            }
        );
        assert_eq!(normalized(&data, &n), vec![0, 255, 128]);
    }

    #[test]
    fn test_auto_maps_extrema_exactly_and_monotonically() {
        let data: Vec<i32> = vec![-500, 12, 7000, -3, 800, 6999, -499];
        let n = plan(&data, ScalePolicy::Auto, &ManualLimits::default(), true).unwrap();
        let bytes = normalized(&data, &n);

        assert_eq!(bytes[0], 0);
        assert_eq!(bytes[2], 255);

        let mut pairs: Vec<(i32, u8)> = data.iter().copied().zip(bytes.iter().copied()).collect();
        pairs.sort_by_key(|&(v, _)| v);
        assert!(pairs.windows(2).all(|w| w[0].1 <= w[1].1));

        assert_eq!(
            n.channel_stats,
            Some(ChannelStatistics {
                data_min: -500.0,
                data_max: 7000.0
            })
        );
        assert_eq!(
            n.image_stats,
            Some(ImageStatistics {
                image_min: 0,
                image_max: 255
            })
        );
    }

    #[test]
    fn test_auto_rescales_bytes_too() {
        let data: Vec<u8> = vec![10, 20, 30];
        let n = plan(&data, ScalePolicy::Auto, &ManualLimits::default(), false).unwrap();
        assert_eq!(normalized(&data, &n), vec![0, 128, 255]);
    }

    #[test]
    fn test_manual_matches_direct_interpolation() {
        let data: Vec<f32> = vec![0.25, 0.5, 0.75, 0.3, 0.6];
        let limits = ManualLimits::new(0.25, 0.75).unwrap();
        let n = plan(&data, ScalePolicy::Manual, &limits, false).unwrap();

        let expected: Vec<u8> = data
            .iter()
            .map(|&v| ((v as f64 - 0.25) / 0.5 * 255.0).round() as u8)
            .collect();
        assert_eq!(normalized(&data, &n), expected);

        let again = plan(&data, ScalePolicy::Manual, &limits, false).unwrap();
        assert_eq!(normalized(&data, &again), expected);
    }

    #[test]
    fn test_manual_saturates_outside_limits() {
        let data: Vec<u16> = vec![0, 99, 100, 150, 200, 201, 65535];
        let limits = ManualLimits::new(100.0, 200.0).unwrap();
        let n = plan(&data, ScalePolicy::Manual, &limits, true).unwrap();

        assert_eq!(normalized(&data, &n), vec![0, 0, 0, 128, 255, 255, 255]);
        assert_eq!(
            n.channel_stats,
            Some(ChannelStatistics {
                data_min: 0.0,
                data_max: 65535.0
            })
        );
        assert_eq!(
            n.image_stats,
            Some(ImageStatistics {
                image_min: 0,
                image_max: 255
            })
        );
    }

    #[test]
    fn test_manual_applies_to_bytes() {
        let data: Vec<u8> = vec![0, 50, 100];
        let limits = ManualLimits::new(0.0, 100.0).unwrap();
        let n = plan(&data, ScalePolicy::Manual, &limits, false).unwrap();
        assert_eq!(normalized(&data, &n), vec![0, 128, 255]);
    }

    #[test]
    fn test_statistics_absent_when_not_requested() {
        let data: Vec<i16> = vec![-4, 4];
        for policy in [ScalePolicy::PassThrough, ScalePolicy::Auto, ScalePolicy::Manual] {
            let n = plan(&data, policy, &ManualLimits::default(), false).unwrap();
            assert_eq!(n.channel_stats, None);
            assert_eq!(n.image_stats, None);
        }
    }

    #[test]
    fn test_image_statistics_match_full_buffer() {
        let data: Vec<f64> = vec![12.0, f64::NAN, 40.0, 19.0, 33.5];
        let limits = ManualLimits::new(15.0, 35.0).unwrap();
        for policy in [ScalePolicy::Auto, ScalePolicy::Manual] {
            let n = plan(&data, policy, &limits, true).unwrap();
            let bytes = normalized(&data, &n);
            let stats = n.image_stats.unwrap();
            assert_eq!(stats.image_min, *bytes.iter().min().unwrap());
            assert_eq!(stats.image_max, *bytes.iter().max().unwrap());
        }
    }

    #[test]
    fn test_flat_frame_maps_to_full_scale() {
        let data: Vec<u16> = vec![42; 6];
        let n = plan(&data, ScalePolicy::Auto, &ManualLimits::default(), true).unwrap();
        assert_eq!(normalized(&data, &n), vec![255; 6]);
        assert_eq!(
            n.image_stats,
            Some(ImageStatistics {
                image_min: 255,
                image_max: 255
            })
        );
    }

    #[test]
    fn test_manual_degenerate_limits_split_at_bound() {
        let data: Vec<u16> = vec![7, 6, 8, 7];
        let limits = ManualLimits::new(7.0, 7.0).unwrap();
        let n = plan(&data, ScalePolicy::Manual, &limits, false).unwrap();
        assert_eq!(normalized(&data, &n), vec![255, 0, 255, 255]);
    }

    #[test]
    fn test_manual_rejects_invalid_limits() {
        let data: Vec<u16> = vec![1, 2, 3];
        let limits = ManualLimits::unchecked(9.0, 1.0);
        let err = plan(&data, ScalePolicy::Manual, &limits, false).unwrap_err();
        assert_eq!(err, PipelineError::InvalidManualLimits(9.0, 1.0));
    }
}

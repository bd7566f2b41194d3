/// One axis's scaling: display unit, tick spacing, and full-scale value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisScale {
    /// Unit label, e.g. `"KB"`.
    pub unit: &'static str,
    /// Tick spacing in `unit`s; the axis shows labels `0, tick, 2·tick, …`.
    pub tick: u32,
    /// Full-scale rate in bytes/sec — four tick intervals.
    pub scale: f64,
}

const UNITS: [(u64, &str); 3] = [(1, "B"), (1 << 10, "KB"), (1 << 20, "MB")];
const FACTORS: [u32; 9] = [1, 2, 5, 10, 20, 50, 100, 200, 500];

/// Pick the smallest "nice" unit/tick pair whose four tick intervals still
/// bound `max_value` (bytes/sec), so the observed maximum sits comfortably
/// inside the top interval. Byte-unit ticks below 50 are skipped; a single
/// byte per pixel would be unreadable at any plot height.
pub fn axis_scale(max_value: f64) -> AxisScale {
    for (base, unit) in UNITS {
        for factor in FACTORS {
            if base == 1 && factor < 50 {
                continue;
            }
            let scale = (base * factor as u64) as f64 * 4.0;
            if scale > max_value {
                return AxisScale {
                    unit,
                    tick: factor,
                    scale,
                };
            }
        }
    }

    // Rates past 2 GB/s clamp to the largest candidate.
    AxisScale {
        unit: "MB",
        tick: 500,
        scale: (500u64 << 20) as f64 * 4.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_link_gets_smallest_byte_scale() {
        let scale = axis_scale(1.0);
        assert_eq!(scale.unit, "B");
        assert_eq!(scale.tick, 50);
        assert_eq!(scale.scale, 200.0);
    }

    #[test]
    fn three_kilobytes_selects_kb_tick_one() {
        // 4 × 500 B = 2000 doesn't bound 3000, so the ladder moves to KB
        // where 4 × 1 × 1024 = 4096 does.
        let scale = axis_scale(3000.0);
        assert_eq!(scale.unit, "KB");
        assert_eq!(scale.tick, 1);
        assert_eq!(scale.scale, 4096.0);
    }

    #[test]
    fn chosen_scale_always_bounds_the_max() {
        for max in [0.0, 1.0, 199.9, 200.0, 3000.0, 1e6, 5e7, 1e9] {
            let scale = axis_scale(max);
            assert!(scale.scale > max || max >= (500u64 << 20) as f64 * 4.0);
        }
    }

    #[test]
    fn chosen_scale_is_the_first_qualifying_candidate() {
        // One step below the chosen candidate must fail the bound.
        let scale = axis_scale(900.0);
        assert_eq!((scale.unit, scale.tick), ("B", 500));

        let scale = axis_scale(2100.0);
        assert_eq!((scale.unit, scale.tick), ("KB", 1));
    }

    #[test]
    fn absurd_rate_clamps_to_largest_candidate() {
        let scale = axis_scale(f64::MAX);
        assert_eq!((scale.unit, scale.tick), ("MB", 500));
    }
}

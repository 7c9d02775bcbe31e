use super::details::TypeGroup;
use crate::core::mask::ResidueMask;
use crate::core::naming::format_float;
use crate::core::nonbonded::{self, SizeConvention};
use std::path::Path;

/// Script for the first ParmEd call: list every atom the mask selects.
pub fn details_script(mask: &ResidueMask) -> String {
    format!("printDetails :{}\n", mask.selector())
}

/// Script for the second ParmEd call: one `addLJType` per group reusing the
/// original parameters, one `changeLJPair` per unordered group pair with the
/// combined radius and scaled epsilon, then `parmout` and `go`.
pub fn scaling_script(groups: &[TypeGroup], scale: f64, output: &Path) -> String {
    let mut script = String::new();

    for group in groups {
        script.push_str(&format!(
            "addLJType {} radius {} epsilon {}\n",
            group.selector(),
            format_float(group.params.size),
            format_float(group.params.epsilon),
        ));
    }

    for (i, j) in nonbonded::pair_indices(groups.len()) {
        let combined = nonbonded::combine(
            groups[i].params,
            groups[j].params,
            scale,
            SizeConvention::RadiusSum,
        );
        script.push_str(&format!(
            "changeLJPair {} {} {} {}\n",
            groups[i].selector(),
            groups[j].selector(),
            format_float(combined.size),
            format_float(combined.epsilon),
        ));
    }

    script.push_str(&format!("parmout {}\ngo\n", output.display()));
    script
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::nonbonded::LjParams;

    fn group(label: &str, ids: &[usize], radius: f64, epsilon: f64) -> TypeGroup {
        TypeGroup {
            label: label.to_string(),
            atom_ids: ids.to_vec(),
            params: LjParams::new(radius, epsilon),
        }
    }

    #[test]
    fn details_script_uses_the_mask_selector() {
        assert_eq!(details_script(&ResidueMask::AllRna), "printDetails :*\n");
        let mask = ResidueMask::parse(Some("2,4")).unwrap();
        assert_eq!(details_script(&mask), "printDetails :2,4\n");
    }

    #[test]
    fn scaling_script_defines_types_then_pairs_then_writes_out() {
        let groups = vec![
            group("N*", &[1, 2], 1.5, 0.1),
            group("CB", &[3, 4], 2.0, 0.2),
        ];

        let cross_epsilon = format_float((0.2f64 * 0.1).sqrt() * 0.5);
        let self_a_epsilon = format_float((0.1f64 * 0.1).sqrt() * 0.5);
        let self_b_epsilon = format_float((0.2f64 * 0.2).sqrt() * 0.5);

        let expected = format!(
            "addLJType @1,2 radius 1.5 epsilon 0.1\n\
             addLJType @3,4 radius 2.0 epsilon 0.2\n\
             changeLJPair @1,2 @1,2 3.0 {self_a_epsilon}\n\
             changeLJPair @3,4 @1,2 3.5 {cross_epsilon}\n\
             changeLJPair @3,4 @3,4 4.0 {self_b_epsilon}\n\
             parmout new.parm7\ngo\n"
        );

        assert_eq!(
            scaling_script(&groups, 0.5, Path::new("new.parm7")),
            expected
        );
    }

    #[test]
    fn scaling_script_with_no_groups_still_writes_the_topology() {
        let script = scaling_script(&[], 0.5, Path::new("out.parm7"));
        assert_eq!(script, "parmout out.parm7\ngo\n");
    }

    #[test]
    fn pair_directives_grow_quadratically_with_group_count() {
        let groups: Vec<TypeGroup> = (0..4)
            .map(|i| group(&format!("T{i}"), &[i + 1], 1.0, 0.1))
            .collect();
        let script = scaling_script(&groups, 1.0, Path::new("o.parm7"));
        let pair_lines = script
            .lines()
            .filter(|l| l.starts_with("changeLJPair"))
            .count();
        assert_eq!(pair_lines, 4 * 5 / 2);
    }
}

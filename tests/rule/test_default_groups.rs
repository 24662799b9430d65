//! Behavior of the rule with the built-in groups

use crate::common::{check, fix};
use import_grouping::Language;
use import_grouping::rule::{MESSAGE, MESSAGE_ID};

#[test]
fn test_single_unlabeled_import_gets_its_label() {
    let code = "import {watch} from 'vue';";

    let diagnostic = check(code, Language::JavaScript).expect("missing label is reported");
    assert_eq!(diagnostic.message_id, MESSAGE_ID);
    assert_eq!(diagnostic.message, MESSAGE);
    assert_eq!(
        fix(code, Language::JavaScript),
        "// vue\nimport {watch} from 'vue';\n"
    );
}

#[test]
fn test_labeled_import_is_valid() {
    let code = "// vue\nimport {watch} from 'vue';";
    assert!(check(code, Language::JavaScript).is_none());
}

#[test]
fn test_groups_are_written_in_configured_order() {
    let code = "import a from '@/utils/x';\nimport b from 'vue';";

    let diagnostic = check(code, Language::JavaScript).unwrap();
    assert_eq!(diagnostic.loc.start.line, 1);
    assert_eq!(diagnostic.loc.end.line, 2);
    assert_eq!(
        fix(code, Language::JavaScript),
        "// vue\nimport b from 'vue';\n\n// utils\nimport a from '@/utils/x';\n"
    );
}

#[test]
fn test_unmatched_import_falls_into_catch_all() {
    assert_eq!(
        fix("import z from 'random-pkg';", Language::JavaScript),
        "// etc\nimport z from 'random-pkg';\n"
    );
}

#[test]
fn test_mismatched_label_is_replaced() {
    let code = "// wrong\nimport {watch} from 'vue';";
    assert!(check(code, Language::JavaScript).is_some());
    assert_eq!(
        fix(code, Language::JavaScript),
        "// vue\nimport {watch} from 'vue';\n"
    );
}

#[test]
fn test_first_matching_group_wins() {
    // Component files also match the views and sections patterns
    let code = "import B from '@/components/Button.vue';\nimport Page from '@/views/Home.vue';\nimport {ref} from 'vue';\n";
    assert_eq!(
        fix(code, Language::JavaScript),
        "// vue\nimport {ref} from 'vue';\n\n// components\nimport B from '@/components/Button.vue';\n\n// views\nimport Page from '@/views/Home.vue';\n\n"
    );
}

#[test]
fn test_catch_all_shares_the_configured_etc_slot() {
    let code = "import z from 'lodash';\nimport m from '@/store/mock';\nimport t from '@/api/types';\nimport {ref} from 'vue';";
    assert_eq!(
        fix(code, Language::TypeScript),
        "// vue\nimport {ref} from 'vue';\n\n// types\nimport t from '@/api/types';\n\n// etc\nimport z from 'lodash';\nimport m from '@/store/mock';\n"
    );
}

#[test]
fn test_only_label_placement_is_checked() {
    // Groups out of order but each introduced by its own label
    let code = "// utils\nimport a from '@/utils/a';\n\n// vue\nimport {ref} from 'vue';\n";
    assert!(check(code, Language::JavaScript).is_none());
}

#[test]
fn test_label_must_be_the_only_preceding_comment() {
    let code = "// note\n// vue\nimport {ref} from 'vue';\n";
    assert!(check(code, Language::JavaScript).is_some());
    assert_eq!(
        fix(code, Language::JavaScript),
        "\n// vue\nimport {ref} from 'vue';\n\n"
    );
}

#[test]
fn test_block_comment_is_not_a_label() {
    let code = "/* vue */\nimport {ref} from 'vue';\n";
    assert!(check(code, Language::JavaScript).is_some());
}

#[test]
fn test_label_text_must_match_exactly() {
    assert!(check("//vue\nimport {ref} from 'vue';", Language::JavaScript).is_some());
    assert!(check("// Vue\nimport {ref} from 'vue';", Language::JavaScript).is_some());
}

#[test]
fn test_files_without_imports_are_ignored() {
    assert!(check("export const a = 1;\n", Language::JavaScript).is_none());
    assert!(check("", Language::TypeScript).is_none());
}

#[test]
fn test_fixed_output_is_stable() {
    let code = r#"import { defineComponent } from 'vue';
import { formatDate } from '@/utils/date';
import type { User } from '@/api/types';
// stray note
import useAuth from '@/use/auth';
import { API_URL } from '@/config/constants';
import axios from 'axios';
import UserService from '@/services/user';

export default defineComponent({});
"#;

    let fixed = fix(code, Language::TypeScript);
    assert!(
        check(&fixed, Language::TypeScript).is_none(),
        "fixed output still invalid:\n{fixed}"
    );
    assert!(fixed.ends_with("\n\nexport default defineComponent({});\n"));

    let labels: Vec<&str> = fixed.lines().filter(|l| l.starts_with("//")).collect();
    assert_eq!(
        labels,
        vec!["// vue", "// types", "// constants", "// etc", "// use", "// services", "// utils"]
    );
    assert!(!fixed.contains("// stray note"));
}

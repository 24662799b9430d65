//! Single-file components: only `<script>` content is checked

use crate::common::{check, fix};
use import_grouping::Language;

#[test]
fn test_script_setup_imports_are_checked() {
    let code = r#"<template>
  <UserCard :user="user" />
</template>

<script setup lang="ts">
// vue
import { ref } from 'vue';

// components
import UserCard from '@/components/UserCard.vue';

const user = ref(null);
</script>
"#;
    assert!(check(code, Language::Vue).is_none());
}

#[test]
fn test_fix_stays_inside_the_script_block() {
    let code = "<template>\n  <div />\n</template>\n<script setup lang=\"ts\">\nimport a from '@/utils/a';\nimport {ref} from 'vue';\n</script>\n";

    let diagnostic = check(code, Language::Vue).unwrap();
    assert_eq!(diagnostic.loc.start.line, 5);

    // The newline after the tag is consumed, so the label shares its line
    let fixed = fix(code, Language::Vue);
    assert_eq!(
        fixed,
        "<template>\n  <div />\n</template>\n<script setup lang=\"ts\">// vue\nimport {ref} from 'vue';\n\n// utils\nimport a from '@/utils/a';\n\n</script>\n"
    );
    assert!(check(&fixed, Language::Vue).is_none());
}

#[test]
fn test_template_without_script_has_nothing_to_check() {
    let code = "<template>\n  <p>import x from 'y';</p>\n</template>\n";
    assert!(check(code, Language::Vue).is_none());
}

#[test]
fn test_imports_split_across_script_blocks_are_reported_without_fix() {
    let code = "<script>\nimport a from 'a';\n</script>\n<script setup>\nimport {ref} from 'vue';\n</script>\n";

    let diagnostic = check(code, Language::Vue).unwrap();
    assert!(diagnostic.fix.is_none());
}

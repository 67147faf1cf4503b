/// Base components contributed by the UI component library plugin.
pub const ELEMENT_COMPONENTS: &[&str] = &[
    "ElAside",
    "ElButton",
    "ElCard",
    "ElCol",
    "ElContainer",
    "ElDatePicker",
    "ElDialog",
    "ElForm",
    "ElFormItem",
    "ElHeader",
    "ElIcon",
    "ElInput",
    "ElInputNumber",
    "ElMain",
    "ElMenu",
    "ElMenuItem",
    "ElOption",
    "ElRow",
    "ElSelect",
    "ElSwitch",
    "ElTable",
    "ElTableColumn",
    "ElTag",
];

/// UI component library installed as a plugin during bootstrap.
#[derive(Debug, Clone, Copy)]
pub struct UiLibrary {
    components: &'static [&'static str],
}

impl UiLibrary {
    pub fn element() -> Self {
        Self {
            components: ELEMENT_COMPONENTS,
        }
    }

    pub fn components(&self) -> &'static [&'static str] {
        self.components
    }
}

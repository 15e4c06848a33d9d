//! Reusable project layouts and source snippets.

use super::TestEnv;

/// Every default layer with one slice each, all public APIs in place and
/// only downward imports.
pub fn conforming_project() -> TestEnv {
    let env = TestEnv::new();
    env.write(
        "src/app/providers/index.ts",
        "import { HomePage } from 'pages/home'\n",
    )
    .write(
        "src/pages/home/index.ts",
        "import { Header } from 'widgets/header'\nimport { Login } from 'features/auth'\n",
    )
    .write(
        "src/widgets/header/index.ts",
        "import { Login } from 'features/auth'\n",
    )
    .write(
        "src/features/auth/index.ts",
        "import { User } from 'entities/user'\nimport { Button } from 'shared/ui'\n",
    )
    .write(
        "src/entities/user/index.ts",
        "import { api } from 'shared/api'\n",
    )
    .write("src/shared/ui/index.ts", "export const Button = () => null\n")
    .write("src/shared/api/index.ts", "export const api = {}\n")
    .write("src/main.ts", "import './app/providers'\n");
    env
}

pub const UPWARD_IMPORT: &str = "import { Header } from 'widgets/header'\n";

pub const CROSS_SLICE_IMPORT: &str = "import { Card } from 'widgets/other/ui'\n";

pub const STRATA_TOML_WARN_ONLY: &str = r#"
[rules.no-cross-slice-imports]
level = "warn"
"#;

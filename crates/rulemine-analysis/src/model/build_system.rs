//! Build system detection from descriptor file names.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildSystem {
    // Declaration order is the tie-break: generators before generated files.
    Cmake,
    Meson,
    Bazel,
    Autotools,
    Scons,
    Premake,
    Msbuild,
    Make,
    Ninja,
    #[default]
    Unknown,
}

impl BuildSystem {
    /// Recognize a build descriptor by its file name.
    pub fn from_file_name(name: &str) -> Option<BuildSystem> {
        match name {
            "CMakeLists.txt" => Some(BuildSystem::Cmake),
            "Makefile" | "GNUmakefile" | "makefile" => Some(BuildSystem::Make),
            "meson.build" => Some(BuildSystem::Meson),
            "BUILD" | "BUILD.bazel" | "WORKSPACE" | "MODULE.bazel" => Some(BuildSystem::Bazel),
            "configure.ac" | "configure.in" => Some(BuildSystem::Autotools),
            "SConstruct" => Some(BuildSystem::Scons),
            "premake5.lua" => Some(BuildSystem::Premake),
            "build.ninja" => Some(BuildSystem::Ninja),
            _ if name.ends_with(".sln") || name.ends_with(".vcxproj") => Some(BuildSystem::Msbuild),
            _ => None,
        }
    }

    /// Pick the build system of the shallowest descriptor. `descriptors`
    /// are root-relative, `/`-separated paths.
    pub fn detect<S: AsRef<str>>(descriptors: &[S]) -> BuildSystem {
        descriptors
            .iter()
            .filter_map(|path| {
                let path = path.as_ref();
                let name = path.rsplit('/').next().unwrap_or(path);
                let depth = path.matches('/').count();
                BuildSystem::from_file_name(name).map(|system| (depth, system))
            })
            .min()
            .map(|(_, system)| system)
            .unwrap_or(BuildSystem::Unknown)
    }

    pub fn name(&self) -> &'static str {
        match self {
            BuildSystem::Cmake => "cmake",
            BuildSystem::Meson => "meson",
            BuildSystem::Bazel => "bazel",
            BuildSystem::Autotools => "autotools",
            BuildSystem::Scons => "scons",
            BuildSystem::Premake => "premake",
            BuildSystem::Msbuild => "msbuild",
            BuildSystem::Make => "make",
            BuildSystem::Ninja => "ninja",
            BuildSystem::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for BuildSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_names() {
        assert_eq!(BuildSystem::from_file_name("CMakeLists.txt"), Some(BuildSystem::Cmake));
        assert_eq!(BuildSystem::from_file_name("GNUmakefile"), Some(BuildSystem::Make));
        assert_eq!(BuildSystem::from_file_name("app.vcxproj"), Some(BuildSystem::Msbuild));
        assert_eq!(BuildSystem::from_file_name("main.cpp"), None);
    }

    #[test]
    fn shallowest_descriptor_wins() {
        let found = ["third_party/zlib/Makefile", "CMakeLists.txt"];
        assert_eq!(BuildSystem::detect(&found), BuildSystem::Cmake);

        let found = ["sub/CMakeLists.txt", "Makefile"];
        assert_eq!(BuildSystem::detect(&found), BuildSystem::Make);
    }

    #[test]
    fn generator_beats_generated_file_at_same_depth() {
        let found = ["Makefile", "CMakeLists.txt"];
        assert_eq!(BuildSystem::detect(&found), BuildSystem::Cmake);
    }

    #[test]
    fn nothing_found_is_unknown() {
        let found: [&str; 0] = [];
        assert_eq!(BuildSystem::detect(&found), BuildSystem::Unknown);
        assert_eq!(BuildSystem::Unknown.to_string(), "unknown");
    }
}

use crate::config::Config;
use std::path::Path;

pub(crate) const GPL_BLOCK: &str = "/* This file is part of VoltDB.\n * Copyright (C) 2008-2024 VoltDB Inc.\n *\n * GNU Affero General Public License v3.\n */\n";

pub(crate) const GPL_HASH: &str =
    "# This file is part of VoltDB.\n# Copyright (C) 2008-2024 VoltDB Inc.\n# GNU Affero General Public License v3.\n";

pub(crate) const MIT_BLOCK: &str = "/* This file is part of VoltDB.\n * Copyright (C) 2008-2024 VoltDB Inc.\n *\n * Permission is hereby granted, free of charge (MIT).\n */\n";

pub(crate) const MIT_HASH: &str =
    "# This file is part of VoltDB.\n# Copyright (C) 2008-2024 VoltDB Inc.\n# Permission is hereby granted (MIT).\n";

pub(crate) const EXT_BLOCK: &str = "/* Copyright (C) VoltDB Pro. All rights reserved. */\n";

pub(crate) const EXT_HASH: &str = "# Copyright (C) VoltDB Pro. All rights reserved.\n";

/// Write `content` to `base/rel`, creating parent directories.
pub(crate) fn write_file(base: &Path, rel: &str, content: &str) {
    let path = base.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
}

pub(crate) fn read_file(base: &Path, rel: &str) -> String {
    std::fs::read_to_string(base.join(rel)).unwrap()
}

/// Populate the licenses directory for the main repository.
///
/// Every list gets a distinct placeholder text per file, except the last
/// entry, which holds the fixture header constant.
pub(crate) fn write_license_dir(base: &Path, config: &Config) {
    let dir = base.join(&config.licenses_dir);
    std::fs::create_dir_all(&dir).unwrap();

    for (files, default, block) in [
        (&config.src_licenses, GPL_BLOCK, true),
        (&config.src_licenses_python, GPL_HASH, false),
        (&config.test_licenses, MIT_BLOCK, true),
        (&config.test_licenses_python, MIT_HASH, false),
    ] {
        let last = files.len() - 1;
        for (i, name) in files.iter().enumerate() {
            let text = if i == last {
                default.to_string()
            } else if block {
                format!("/* {} */\n", name)
            } else {
                format!("# {}\n", name)
            };
            std::fs::write(dir.join(name), text).unwrap();
        }
    }
}

/// Populate `<repo>/tools/approved_licenses` for an external repository.
pub(crate) fn write_external_license_dir(repo: &Path, config: &Config) {
    let dir = repo.join(&config.licenses_dir);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join(&config.external_license), EXT_BLOCK).unwrap();
    std::fs::write(dir.join(&config.external_license_python), EXT_HASH).unwrap();
}

/// Create the three scanned roots, empty.
pub(crate) fn create_roots(base: &Path, config: &Config) {
    for root in config.source_roots.iter().chain(&config.test_roots) {
        std::fs::create_dir_all(base.join(root)).unwrap();
    }
}

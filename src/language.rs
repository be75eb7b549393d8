use crate::token::token_enum;

token_enum! {
    /// Languages accepted by the `language:` qualifier, named as GitHub shows them.
    pub enum Language as "language" {
        Abap => "ABAP",
        ActionScript => "ActionScript",
        Ada => "Ada",
        Agda => "Agda",
        Alloy => "Alloy",
        AngelScript => "AngelScript",
        Antlr => "ANTLR",
        ApacheConf => "ApacheConf",
        Apex => "Apex",
        Apl => "APL",
        AppleScript => "AppleScript",
        Arc => "Arc",
        Arduino => "Arduino",
        AsciiDoc => "AsciiDoc",
        AspNet => "ASP.NET",
        Assembly => "Assembly",
        Astro => "Astro",
        Augeas => "Augeas",
        AutoHotkey => "AutoHotkey",
        AutoIt => "AutoIt",
        Awk => "Awk",
        Ballerina => "Ballerina",
        Batchfile => "Batchfile",
        Befunge => "Befunge",
        Bicep => "Bicep",
        BitBake => "BitBake",
        BlitzBasic => "BlitzBasic",
        BlitzMax => "BlitzMax",
        Boo => "Boo",
        Brainfuck => "Brainfuck",
        Bro => "Bro",
        C => "C",
        CSharp => "C#",
        CPlusPlus => "C++",
        Cairo => "Cairo",
        Ceylon => "Ceylon",
        Chapel => "Chapel",
        Cirru => "Cirru",
        Clarion => "Clarion",
        Clean => "Clean",
        Clojure => "Clojure",
        CMake => "CMake",
        Cobol => "COBOL",
        CoffeeScript => "CoffeeScript",
        ColdFusion => "ColdFusion",
        CommonLisp => "Common Lisp",
        ComponentPascal => "Component Pascal",
        Coq => "Coq",
        Crystal => "Crystal",
        Css => "CSS",
        Cuda => "Cuda",
        Cython => "Cython",
        D => "D",
        Dart => "Dart",
        Dcpu16Asm => "DCPU-16 ASM",
        Dhall => "Dhall",
        Diff => "Diff",
        Dockerfile => "Dockerfile",
        DTrace => "DTrace",
        Dylan => "Dylan",
        Ecl => "ECL",
        Eiffel => "Eiffel",
        Elixir => "Elixir",
        Elm => "Elm",
        EmacsLisp => "Emacs Lisp",
        Erlang => "Erlang",
        FSharp => "F#",
        Factor => "Factor",
        Fancy => "Fancy",
        Fantom => "Fantom",
        Fennel => "Fennel",
        Fish => "fish",
        Forth => "Forth",
        Fortran => "Fortran",
        FreeMarker => "FreeMarker",
        Gap => "GAP",
        GdScript => "GDScript",
        Gleam => "Gleam",
        Glsl => "GLSL",
        Gnuplot => "Gnuplot",
        Go => "Go",
        Gosu => "Gosu",
        GraphQl => "GraphQL",
        Groovy => "Groovy",
        Hack => "Hack",
        Haml => "Haml",
        Handlebars => "Handlebars",
        Harbour => "Harbour",
        Haskell => "Haskell",
        Haxe => "Haxe",
        Hcl => "HCL",
        Hlsl => "HLSL",
        Html => "HTML",
        Hy => "Hy",
        Idl => "IDL",
        Idris => "Idris",
        Io => "Io",
        Ioke => "Ioke",
        Isabelle => "Isabelle",
        J => "J",
        Janet => "Janet",
        Java => "Java",
        JavaScript => "JavaScript",
        Jinja => "Jinja",
        Json => "JSON",
        Jsonnet => "Jsonnet",
        Julia => "Julia",
        JupyterNotebook => "Jupyter Notebook",
        Kotlin => "Kotlin",
        Lasso => "Lasso",
        Lean => "Lean",
        Less => "Less",
        LiveScript => "LiveScript",
        Llvm => "LLVM",
        Logos => "Logos",
        Logtalk => "Logtalk",
        Lua => "Lua",
        M => "M",
        Makefile => "Makefile",
        Markdown => "Markdown",
        Mathematica => "Mathematica",
        Matlab => "MATLAB",
        Max => "Max",
        Mercury => "Mercury",
        Meson => "Meson",
        Mirah => "Mirah",
        Modelica => "Modelica",
        Monkey => "Monkey",
        Moocode => "Moocode",
        MoonScript => "MoonScript",
        Move => "Move",
        Mustache => "Mustache",
        Nemerle => "Nemerle",
        NesC => "nesC",
        NetLogo => "NetLogo",
        Nginx => "Nginx",
        Nim => "Nim",
        Nit => "Nit",
        Nix => "Nix",
        Nu => "Nu",
        Nushell => "Nushell",
        ObjectiveC => "Objective-C",
        ObjectiveCPlusPlus => "Objective-C++",
        ObjectiveJ => "Objective-J",
        OCaml => "OCaml",
        Odin => "Odin",
        Omgrofl => "Omgrofl",
        Ooc => "ooc",
        Opa => "Opa",
        OpenCl => "OpenCL",
        OpenEdgeAbl => "OpenEdge ABL",
        OpenScad => "OpenSCAD",
        Oxygene => "Oxygene",
        Oz => "Oz",
        Pan => "Pan",
        Parrot => "Parrot",
        Pascal => "Pascal",
        Pawn => "PAWN",
        Perl => "Perl",
        Php => "PHP",
        PlSql => "PLSQL",
        Pike => "Pike",
        PogoScript => "PogoScript",
        PostScript => "PostScript",
        PowerBuilder => "PowerBuilder",
        PowerShell => "PowerShell",
        Processing => "Processing",
        Prolog => "Prolog",
        Protobuf => "Protocol Buffer",
        Pug => "Pug",
        Puppet => "Puppet",
        PureBasic => "PureBasic",
        PureData => "Pure Data",
        PureScript => "PureScript",
        Python => "Python",
        Q => "q",
        Qml => "QML",
        R => "R",
        Racket => "Racket",
        Ragel => "Ragel",
        Raku => "Raku",
        ReasonMl => "Reason",
        Rebol => "Rebol",
        Red => "Red",
        Rescript => "ReScript",
        RenderScript => "RenderScript",
        Rexx => "REXX",
        RobotFramework => "RobotFramework",
        Roff => "Roff",
        Ruby => "Ruby",
        Rust => "Rust",
        Sas => "SAS",
        Sass => "Sass",
        Scala => "Scala",
        Scheme => "Scheme",
        Scilab => "Scilab",
        Scss => "SCSS",
        SelfLanguage => "Self",
        Shell => "Shell",
        ShaderLab => "ShaderLab",
        Shen => "Shen",
        Slash => "Slash",
        Smalltalk => "Smalltalk",
        Smarty => "Smarty",
        Solidity => "Solidity",
        SourcePawn => "SourcePawn",
        Sql => "SQL",
        Squirrel => "Squirrel",
        StandardMl => "Standard ML",
        Starlark => "Starlark",
        Stata => "Stata",
        Stylus => "Stylus",
        SuperCollider => "SuperCollider",
        Svelte => "Svelte",
        Swift => "Swift",
        SystemVerilog => "SystemVerilog",
        Tcl => "Tcl",
        Tex => "TeX",
        Terra => "Terra",
        Thrift => "Thrift",
        Tsql => "TSQL",
        Turing => "Turing",
        Twig => "Twig",
        TypeScript => "TypeScript",
        UnrealScript => "UnrealScript",
        Vala => "Vala",
        Vcl => "VCL",
        Verilog => "Verilog",
        Vhdl => "VHDL",
        VimScript => "Vim Script",
        VisualBasic => "Visual Basic",
        VisualBasicNet => "Visual Basic .NET",
        Volt => "Volt",
        Vue => "Vue",
        WebAssembly => "WebAssembly",
        Wgsl => "WGSL",
        Xbase => "xBase",
        Xc => "XC",
        Xml => "XML",
        Xojo => "Xojo",
        Xquery => "XQuery",
        Xslt => "XSLT",
        Xtend => "Xtend",
        Yacc => "Yacc",
        Yaml => "YAML",
        Zephir => "Zephir",
        Zig => "Zig",
        Zimpl => "Zimpl",
    }
}
